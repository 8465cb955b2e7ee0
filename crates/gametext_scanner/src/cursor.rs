//! The token scanner.
//!
//! A [`Cursor`] is advanced in place, one token per call, so a single cursor
//! can walk a whole script. Scanning never fails: running out of input or
//! hitting a line boundary under [`StopPolicy::StopOnNewline`] yields `None`.

use gametext_foundation::Span;

use crate::source::Source;
use crate::token::{StopPolicy, Token};

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Scan position over a [`Source`].
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    /// Input being scanned.
    source: Source<'src>,
    /// Byte offset of the next unread byte.
    position: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub const fn new(source: Source<'src>) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the byte offset of the next unread byte.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the unread remainder of the source.
    #[must_use]
    pub fn rest(&self) -> &'src [u8] {
        &self.source.as_bytes()[self.position..]
    }

    /// Returns the next unread byte without consuming it.
    #[must_use]
    pub fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.position).copied()
    }

    /// Returns true once the whole source has been consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Scans the next token.
    ///
    /// Leading whitespace is skipped first. `stop` is only consulted during
    /// that skip: once a token body has started, an LF inside a quoted token
    /// does not end it.
    ///
    /// Returns `None` at end of input (repeatedly, without moving) or, under
    /// [`StopPolicy::StopOnNewline`], when the next byte to skip is an LF. The
    /// LF stays unread so the caller can resume with
    /// [`StopPolicy::DontStop`].
    pub fn next_token(&mut self, stop: StopPolicy) -> Option<Token<'src>> {
        let bytes = self.source.as_bytes();

        let first = loop {
            let &b = bytes.get(self.position)?;
            if !is_whitespace(b) {
                break b;
            }
            if b == b'\n' && stop == StopPolicy::StopOnNewline {
                return None;
            }
            self.position += 1;
        };

        if first == b'"' {
            let start = self.position + 1;
            let end = memchr::memchr(b'"', &bytes[start..]).map_or(bytes.len(), |i| start + i);
            // step over the closing quote when there is one
            self.position = (end + 1).min(bytes.len());
            return Some(Token::new(&bytes[start..end], Span::new(start, end), true));
        }

        let start = self.position;
        let end = bytes[start..]
            .iter()
            .position(|&b| is_whitespace(b))
            .map_or(bytes.len(), |i| start + i);
        self.position = end;
        Some(Token::new(&bytes[start..end], Span::new(start, end), false))
    }

    /// Returns an iterator that scans the rest of the input under `stop`.
    #[must_use]
    pub fn tokens(self, stop: StopPolicy) -> Tokens<'src> {
        Tokens { cursor: self, stop }
    }
}

/// Scans the next token from `cursor`.
///
/// Same as [`Cursor::next_token`].
pub fn parse_token<'src>(cursor: &mut Cursor<'src>, stop: StopPolicy) -> Option<Token<'src>> {
    cursor.next_token(stop)
}

/// Iterator over the tokens of a cursor.
///
/// Ends at the first `None` from the scanner, so under
/// [`StopPolicy::StopOnNewline`] it yields the tokens of one line.
#[derive(Clone, Debug)]
pub struct Tokens<'src> {
    cursor: Cursor<'src>,
    stop: StopPolicy,
}

impl<'src> Tokens<'src> {
    /// Returns the underlying cursor, positioned after the last token yielded.
    #[must_use]
    pub const fn into_cursor(self) -> Cursor<'src> {
        self.cursor
    }
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_token(self.stop)
    }
}

/// Tokenizes all of `source`, crossing line boundaries.
#[must_use]
pub fn tokenize_all(source: &str) -> Vec<Token<'_>> {
    Source::new(source)
        .cursor()
        .tokens(StopPolicy::DontStop)
        .collect()
}
