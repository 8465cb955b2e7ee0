//! Token types.
//!
//! A token never owns its text. It borrows from the [`Source`](crate::Source)
//! it was scanned from and records where it sits there.

use std::fmt;

use gametext_foundation::Span;

use crate::numeric;

/// Whether a scan may cross a line boundary before a token starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StopPolicy {
    /// Return no token if an LF is met while skipping leading whitespace.
    ///
    /// The LF is not consumed, so the cursor is left on it.
    StopOnNewline,
    /// Skip LF like any other whitespace.
    #[default]
    DontStop,
}

/// A token from the scanner.
///
/// A zero-length token is a real token (it comes from `""`). "No token" is
/// represented by `None` wherever a token is returned.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    bytes: &'src [u8],
    span: Span,
    quoted: bool,
}

impl<'src> Token<'src> {
    pub(crate) const fn new(bytes: &'src [u8], span: Span, quoted: bool) -> Self {
        Self {
            bytes,
            span,
            quoted,
        }
    }

    /// Returns where this token's text sits in the source.
    ///
    /// For quoted tokens the span excludes the quotes.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the token text as raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'src [u8] {
        self.bytes
    }

    /// Returns the token text if it is valid UTF-8.
    ///
    /// Tokens scanned from a `&str` source are always valid, since the
    /// scanner only splits at ASCII bytes.
    #[must_use]
    pub fn as_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.bytes).ok()
    }

    /// Returns the length of the token text in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true for a zero-length token.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns true if the token was enclosed in quotes.
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// ASCII case-insensitive comparison with `other`.
    #[must_use]
    pub fn eq_ignore_ascii_case(&self, other: &str) -> bool {
        self.bytes.eq_ignore_ascii_case(other.as_bytes())
    }

    /// Parses the token as a 32-bit integer.
    #[must_use]
    pub fn to_int(&self) -> Option<i32> {
        numeric::try_parse_int(self.bytes)
    }

    /// Parses the token as a float.
    #[must_use]
    pub fn to_float(&self) -> Option<f32> {
        numeric::try_parse_float(self.bytes)
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("text", &String::from_utf8_lossy(self.bytes))
            .field("span", &self.span)
            .field("quoted", &self.quoted)
            .finish()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.bytes))
    }
}
