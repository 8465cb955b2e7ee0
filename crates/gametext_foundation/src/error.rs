//! Error types for gametext.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Scanning and numeric conversion never produce these errors; they return
//! `Option` and let callers pick a default. Errors are reserved for the info
//! string trust boundary and for corrupt map content.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout gametext.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for gametext operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid info string error.
    #[must_use]
    pub fn invalid_info_string(violation: InfoViolation) -> Self {
        Self::new(ErrorKind::InvalidInfoString(violation))
    }

    /// Creates an invalid key error.
    #[must_use]
    pub fn invalid_key(violation: InfoViolation) -> Self {
        Self::new(ErrorKind::InvalidKey(violation))
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(violation: InfoViolation) -> Self {
        Self::new(ErrorKind::InvalidValue(violation))
    }

    /// Creates an error for a record that would not fit in the info string.
    #[must_use]
    pub fn overflow(required: usize, limit: usize) -> Self {
        Self::new(ErrorKind::InfoStringOverflow { required, limit })
    }

    /// Creates an unbalanced quotes error.
    #[must_use]
    pub fn unbalanced_quotes(quotes: usize) -> Self {
        Self::new(ErrorKind::UnbalancedQuotes { quotes })
    }

    /// Creates a corrupt content error.
    #[must_use]
    pub fn corrupt_content(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CorruptContent {
            message: message.into(),
        })
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }

    /// Returns true if this error signals corrupt content from the build
    /// pipeline rather than bad runtime input.
    ///
    /// Hosts usually abort on fatal errors and skip or refuse everything else.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The info string failed structural or character validation.
    #[error("invalid info string: {0}")]
    InvalidInfoString(InfoViolation),

    /// The key failed validation.
    #[error("invalid info key: {0}")]
    InvalidKey(InfoViolation),

    /// The value failed validation.
    #[error("invalid info value: {0}")]
    InvalidValue(InfoViolation),

    /// Appending a record would reach the configured maximum length.
    #[error("info string overflow: {required} bytes needed, limit is {limit}")]
    InfoStringOverflow {
        /// Total length the info string would have had.
        required: usize,
        /// The configured maximum.
        limit: usize,
    },

    /// A configstring had an odd number of quote characters.
    #[error("unbalanced quotes in configstring ({quotes} quote characters)")]
    UnbalancedQuotes {
        /// Number of quote characters found.
        quotes: usize,
    },

    /// Map content is malformed in a way the build pipeline should never emit.
    #[error("corrupt content: {message}")]
    CorruptContent {
        /// Description of what was malformed.
        message: String,
    },

    /// Configured limits cannot describe any valid info string.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ErrorKind {
    /// Returns true for the fatal classification.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::CorruptContent { .. })
    }
}

/// Why a key, value, or info string was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoViolation {
    /// The string was empty where content is required.
    Empty,
    /// The string is at or above its length bound.
    TooLong {
        /// Actual length in bytes.
        length: usize,
        /// The exclusive bound.
        limit: usize,
    },
    /// A record inside an info string has a zero-length key (`\\value`).
    EmptyKey {
        /// Byte offset where the key should start.
        offset: usize,
    },
    /// A backslash, semicolon, or double quote appeared where it is not allowed.
    ForbiddenByte {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending byte.
        offset: usize,
    },
    /// A record did not start with, or a key was not followed by, a backslash.
    MissingDelimiter {
        /// Byte offset where the delimiter was expected.
        offset: usize,
    },
    /// A key or value segment inside the info string is at or above its bound.
    SegmentTooLong {
        /// Byte offset where the segment starts.
        offset: usize,
        /// Segment length in bytes.
        length: usize,
        /// The exclusive bound.
        limit: usize,
    },
}

impl fmt::Display for InfoViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::EmptyKey { offset } => write!(f, "empty key at offset {offset}"),
            Self::TooLong { length, limit } => {
                write!(f, "length {length} is not below limit {limit}")
            }
            Self::ForbiddenByte { byte, offset } => {
                write!(
                    f,
                    "forbidden character {:?} at offset {offset}",
                    char::from(*byte)
                )
            }
            Self::MissingDelimiter { offset } => {
                write!(f, "missing '\\' delimiter at offset {offset}")
            }
            Self::SegmentTooLong {
                offset,
                length,
                limit,
            } => {
                write!(
                    f,
                    "segment at offset {offset} has length {length}, limit is {limit}"
                )
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Source name (map file, network channel, cvar).
    pub source: Option<String>,
    /// Byte offset in the source text.
    pub offset: Option<usize>,
    /// Stack of enclosing operations.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            offset: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the byte offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(offset) = self.offset {
                write!(f, "+{offset}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
