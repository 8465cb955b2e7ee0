//! Small string helpers shared by console, menu, and network code.
//!
//! Everything here works on ASCII semantics. Non-ASCII bytes are carried
//! through untouched unless a function says otherwise.

/// Size of the scratch strings used by console and menu code.
pub const MAX_STRING_CHARS: usize = 1024;

/// Byte-exact comparison.
#[must_use]
pub fn str_equal(lhs: impl AsRef<[u8]>, rhs: impl AsRef<[u8]>) -> bool {
    lhs.as_ref() == rhs.as_ref()
}

/// ASCII case-insensitive comparison. Two empty inputs are equal.
#[must_use]
pub fn str_case_equal(lhs: impl AsRef<[u8]>, rhs: impl AsRef<[u8]>) -> bool {
    lhs.as_ref().eq_ignore_ascii_case(rhs.as_ref())
}

/// Returns true if `s` begins with `prefix`.
#[must_use]
pub fn starts_with(s: impl AsRef<[u8]>, prefix: impl AsRef<[u8]>) -> bool {
    s.as_ref().starts_with(prefix.as_ref())
}

const fn is_trimmed(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Removes leading and trailing space, tab, CR, and LF in place.
pub fn trim(s: &mut String) {
    let end = s.trim_end_matches(is_trimmed).len();
    s.truncate(end);
    let leading = s.len() - s.trim_start_matches(is_trimmed).len();
    s.drain(..leading);
}

/// Strips trailing zeroes from a formatted float.
///
/// Only touches strings that contain a decimal point. The point goes too if
/// nothing is left after it: `"1.500"` becomes `"1.5"` and `"2.000"` becomes
/// `"2"`.
pub fn remove_trailing_zeroes_float(s: &mut String) {
    if !s.contains('.') {
        return;
    }
    let end = s.trim_end_matches('0').len();
    s.truncate(end);
    if s.ends_with('.') {
        s.pop();
    }
}

const fn is_url_unsafe(c: char) -> bool {
    matches!(
        c,
        ' ' | '#' | '%' | '<' | '>' | '{' | '}' | '|' | '\\' | '^' | '~' | '[' | ']'
    )
}

/// Percent-encodes characters that break URLs.
///
/// The output holds at most `max_len - 1` bytes, mirroring a fixed
/// destination buffer that keeps room for a terminator. An escape that would
/// not fit is dropped along with everything after it.
#[must_use]
pub fn url_encode_unsafe_chars(src: &str, max_len: usize) -> String {
    let capacity = max_len.saturating_sub(1);
    let mut out = String::with_capacity(src.len().min(capacity));

    for c in src.chars() {
        if is_url_unsafe(c) {
            if out.len() + 3 > capacity {
                break;
            }
            out.push_str(&format!("%{:02x}", u32::from(c)));
        } else {
            if out.len() + c.len_utf8() > capacity {
                break;
            }
            out.push(c);
        }
    }

    out
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes `%XX` escapes, copying everything else through.
///
/// Decoding stops once `max_len - 1` bytes have been produced. A `%` that is
/// not followed by two hex digits is copied literally.
#[must_use]
pub fn url_decode(src: &str, max_len: usize) -> Vec<u8> {
    let capacity = max_len.saturating_sub(1);
    let bytes = src.as_bytes();
    let mut out = Vec::with_capacity(bytes.len().min(capacity));
    let mut i = 0;

    while i < bytes.len() && out.len() < capacity {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    out
}

/// Returns the `position`-th entry of a separator-terminated list.
///
/// Entries must be followed by `separator` to count, so the tail of
/// `"a;b;c"` is never returned. An empty entry yields `None`. Entries are
/// cut to at most `MAX_STRING_CHARS - 1` bytes, on a character boundary.
#[must_use]
pub fn list_name_for_position(list: &str, position: usize, separator: char) -> Option<&str> {
    let mut rest = list;
    for index in 0..=position {
        let end = rest.find(separator)?;
        if index == position {
            if end == 0 {
                return None;
            }
            let mut len = end.min(MAX_STRING_CHARS - 1);
            while !rest.is_char_boundary(len) {
                len -= 1;
            }
            return Some(&rest[..len]);
        }
        rest = &rest[end + separator.len_utf8()..];
    }
    None
}

/// Reduces a string to characters safe for generated file names.
///
/// Keeps ASCII letters and digits, maps `<[{` to `(` and `>]}` to `)`, maps
/// `./_` to `_`, and drops everything else.
#[must_use]
pub fn remove_junk_chars(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() => Some(c),
            '<' | '[' | '{' => Some('('),
            '>' | ']' | '}' => Some(')'),
            '.' | '/' | '_' => Some('_'),
            _ => None,
        })
        .take(MAX_STRING_CHARS - 1)
        .collect()
}
