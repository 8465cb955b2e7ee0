//! Validation of keys, values, info strings, and configstrings.
//!
//! Info strings cross the network, so everything the codec touches is
//! validated first. A failed check is a refusal, never a panic.

use gametext_foundation::{Error, InfoLimits, InfoViolation, Result};

/// Separates keys and values.
pub const DELIMITER: u8 = b'\\';

/// Ends a console statement; would split a command carrying the string.
pub const TERMINATOR: u8 = b';';

/// Quotes console arguments; would unbalance a command carrying the string.
pub const QUOTE: u8 = b'"';

fn forbidden_byte(s: &str, forbidden: &[u8]) -> Option<InfoViolation> {
    s.bytes()
        .position(|b| forbidden.contains(&b))
        .map(|offset| InfoViolation::ForbiddenByte {
            byte: s.as_bytes()[offset],
            offset,
        })
}

fn check_text(s: &str, limit: usize) -> std::result::Result<(), InfoViolation> {
    if s.len() >= limit {
        return Err(InfoViolation::TooLong {
            length: s.len(),
            limit,
        });
    }
    forbidden_byte(s, &[DELIMITER, TERMINATOR, QUOTE]).map_or(Ok(()), Err)
}

/// Checks a key: non-empty, below `max_info_key`, no `\`, `;`, or `"`.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidKey`](gametext_foundation::ErrorKind::InvalidKey)
/// describing the first problem found.
pub fn validate_key(key: &str, limits: &InfoLimits) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_key(InfoViolation::Empty));
    }
    check_text(key, limits.max_info_key).map_err(Error::invalid_key)
}

/// Checks a value: below `max_info_value`, no `\`, `;`, or `"`. May be empty.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidValue`](gametext_foundation::ErrorKind::InvalidValue)
/// describing the first problem found.
pub fn validate_value(value: &str, limits: &InfoLimits) -> Result<()> {
    check_text(value, limits.max_info_value).map_err(Error::invalid_value)
}

/// Checks a whole info string.
///
/// The string must be below `max_info_string`, contain no `;` or `"`, and
/// consist entirely of `\key\value` records. Every key must be non-empty and
/// below `max_info_key`; every value below `max_info_value`.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidInfoString`](gametext_foundation::ErrorKind::InvalidInfoString)
/// describing the first problem found.
pub fn validate_info_string(info: &str, limits: &InfoLimits) -> Result<()> {
    check_structure(info, limits).map_err(Error::invalid_info_string)
}

fn check_structure(info: &str, limits: &InfoLimits) -> std::result::Result<(), InfoViolation> {
    if info.len() >= limits.max_info_string {
        return Err(InfoViolation::TooLong {
            length: info.len(),
            limit: limits.max_info_string,
        });
    }
    if let Some(violation) = forbidden_byte(info, &[TERMINATOR, QUOTE]) {
        return Err(violation);
    }

    let bytes = info.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] != DELIMITER {
            return Err(InfoViolation::MissingDelimiter { offset: pos });
        }
        pos += 1;

        let key_start = pos;
        let Some(key_len) = memchr::memchr(DELIMITER, &bytes[key_start..]) else {
            return Err(InfoViolation::MissingDelimiter { offset: bytes.len() });
        };
        if key_len == 0 {
            return Err(InfoViolation::EmptyKey { offset: key_start });
        }
        if key_len >= limits.max_info_key {
            return Err(InfoViolation::SegmentTooLong {
                offset: key_start,
                length: key_len,
                limit: limits.max_info_key,
            });
        }
        pos = key_start + key_len + 1;

        let value_start = pos;
        let value_len =
            memchr::memchr(DELIMITER, &bytes[value_start..]).unwrap_or(bytes.len() - value_start);
        if value_len >= limits.max_info_value {
            return Err(InfoViolation::SegmentTooLong {
                offset: value_start,
                length: value_len,
                limit: limits.max_info_value,
            });
        }
        pos = value_start + value_len;
    }

    Ok(())
}

/// Returns true if `s` holds an even number of `"` characters.
///
/// This is a parity check only. It says nothing about where the quotes are.
#[must_use]
pub fn validate_configstring(s: &str) -> bool {
    quote_count(s) % 2 == 0
}

/// [`validate_configstring`] as a `Result`, carrying the quote count.
///
/// # Errors
///
/// Returns [`ErrorKind::UnbalancedQuotes`](gametext_foundation::ErrorKind::UnbalancedQuotes)
/// when the count is odd.
pub fn check_configstring(s: &str) -> Result<()> {
    let quotes = quote_count(s);
    if quotes % 2 == 0 {
        Ok(())
    } else {
        tracing::debug!(quotes, "configstring has unbalanced quotes");
        Err(Error::unbalanced_quotes(quotes))
    }
}

fn quote_count(s: &str) -> usize {
    memchr::memchr_iter(QUOTE, s.as_bytes()).count()
}
