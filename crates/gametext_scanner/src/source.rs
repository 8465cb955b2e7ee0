//! Scannable input.
//!
//! Both input representations end up here: a bounded slice is used as is,
//! and a NUL-terminated buffer has its length computed once when the
//! [`Source`] is built. The scanner only ever sees a slice plus a length.

use crate::cursor::Cursor;

/// A bounded byte sequence the scanner reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Source<'src> {
    bytes: &'src [u8],
}

impl<'src> Source<'src> {
    /// Creates a source over UTF-8 text.
    #[must_use]
    pub const fn new(text: &'src str) -> Self {
        Self {
            bytes: text.as_bytes(),
        }
    }

    /// Creates a source over raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: &'src [u8]) -> Self {
        Self { bytes }
    }

    /// Creates a source from a buffer holding a NUL-terminated string.
    ///
    /// The source ends at the first NUL byte, or at the end of the buffer if
    /// there is none.
    #[must_use]
    pub fn from_nul_terminated(buffer: &'src [u8]) -> Self {
        let len = memchr::memchr(0, buffer).unwrap_or(buffer.len());
        Self {
            bytes: &buffer[..len],
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'src [u8] {
        self.bytes
    }

    /// Returns the length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if there is nothing to scan.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns a cursor positioned at the start of this source.
    #[must_use]
    pub const fn cursor(self) -> Cursor<'src> {
        Cursor::new(self)
    }
}

impl<'src> From<&'src str> for Source<'src> {
    fn from(text: &'src str) -> Self {
        Self::new(text)
    }
}

impl<'src> From<&'src [u8]> for Source<'src> {
    fn from(bytes: &'src [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
