//! Numeric conversions for tokens and strings.
//!
//! The `try_*` functions return `None` on any malformed or out-of-range
//! input. The `*_or` wrappers substitute a default and never fail.

use crate::cursor::Cursor;
use crate::token::StopPolicy;

/// Size of the fixed conversion buffer.
///
/// Spans of this length or longer are rejected outright; a span has to fit
/// together with its terminator.
pub const CONVERSION_BUFFER_LEN: usize = 128;

fn bounded_str(span: &[u8]) -> Option<&str> {
    if span.len() >= CONVERSION_BUFFER_LEN {
        return None;
    }
    std::str::from_utf8(span).ok()
}

/// Parses a base-10 `i32` with an optional sign.
///
/// Fails on empty input, trailing garbage, whitespace, or a value outside
/// the `i32` range.
#[must_use]
pub fn try_parse_int(span: &[u8]) -> Option<i32> {
    bounded_str(span)?.parse().ok()
}

/// Parses a float literal (optional sign, fraction, and exponent).
///
/// The whole span must be consumed.
#[must_use]
pub fn try_parse_float(span: &[u8]) -> Option<f32> {
    if span.is_empty() {
        return None;
    }
    bounded_str(span)?.parse().ok()
}

/// Parses an unsigned decimal `u64`, digit by digit.
///
/// No sign is accepted. Fails on empty input, any non-digit byte, or
/// overflow.
#[must_use]
pub fn try_parse_u64(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }

    let mut value: u64 = 0;
    for b in s.bytes() {
        if !b.is_ascii_digit() {
            return None;
        }
        let digit = u64::from(b - b'0');
        value = value.checked_mul(10)?.checked_add(digit)?;
    }
    Some(value)
}

/// [`try_parse_int`], or `default` on failure.
#[must_use]
pub fn parse_int_or(span: &[u8], default: i32) -> i32 {
    try_parse_int(span).unwrap_or(default)
}

/// [`try_parse_float`], or `default` on failure.
#[must_use]
pub fn parse_float_or(span: &[u8], default: f32) -> f32 {
    try_parse_float(span).unwrap_or(default)
}

/// [`try_parse_u64`], or `default` on failure.
#[must_use]
pub fn parse_u64_or(s: &str, default: u64) -> u64 {
    try_parse_u64(s).unwrap_or(default)
}

/// Scans one token and parses it as an `i32`.
///
/// A missing token or a failed conversion yields `default`. The token is
/// consumed either way.
pub fn parse_next_int(cursor: &mut Cursor<'_>, default: i32, stop: StopPolicy) -> i32 {
    cursor
        .next_token(stop)
        .map_or(default, |token| parse_int_or(token.as_bytes(), default))
}

/// Scans one token and parses it as an `f32`.
///
/// A missing token or a failed conversion yields `default`. The token is
/// consumed either way.
pub fn parse_next_float(cursor: &mut Cursor<'_>, default: f32, stop: StopPolicy) -> f32 {
    cursor
        .next_token(stop)
        .map_or(default, |token| parse_float_or(token.as_bytes(), default))
}
