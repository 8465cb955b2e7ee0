//! Owned info string storage.

use std::fmt;
use std::ops::Range;

/// A caller-owned info string, mutated in place by [`InfoCodec`](crate::InfoCodec).
///
/// Splicing goes through [`remove_range`](Self::remove_range) and
/// [`insert_str`](Self::insert_str), which shift the tail correctly even
/// though source and destination overlap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InfoBuffer {
    text: String,
}

impl InfoBuffer {
    /// Creates an empty info string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Creates an empty info string with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
        }
    }

    /// Returns the encoded records.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Removes `range`, shifting everything after it left.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or does not fall on character
    /// boundaries.
    pub fn remove_range(&mut self, range: Range<usize>) {
        self.text.replace_range(range, "");
    }

    /// Inserts `s` at byte offset `at`, shifting everything after it right.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of bounds or not on a character boundary.
    pub fn insert_str(&mut self, at: usize, s: &str) {
        self.text.insert_str(at, s);
    }

    /// Appends `s`.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Shortens the buffer to `len` bytes.
    pub fn truncate(&mut self, len: usize) {
        self.text.truncate(len);
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Consumes the buffer, returning the encoded string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for InfoBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for InfoBuffer {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for InfoBuffer {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }
}

impl From<String> for InfoBuffer {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl PartialEq<str> for InfoBuffer {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for InfoBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
