//! Token scanner for config scripts and map entity text.
//!
//! This crate provides:
//! - [`Source`] - A bounded byte sequence, built from a `&str`, a byte slice,
//!   or a NUL-terminated buffer
//! - [`Cursor`] - Scan position that yields one [`Token`] per call
//! - [`numeric`] - Bounded, overflow-checked integer and float conversions
//! - [`extract_entity_property`] - Worldspawn property lookup
//!
//! # Grammar
//!
//! Whitespace is space, tab, CR, and LF. A token starting with `"` runs to the
//! next `"` (or the end of input) and may be empty. Any other token runs to
//! the next whitespace byte.
//!
//! ```
//! use gametext_scanner::{Source, StopPolicy};
//!
//! let mut cursor = Source::new("bind \"mouse1\" +attack").cursor();
//! let mut words = Vec::new();
//! while let Some(token) = cursor.next_token(StopPolicy::DontStop) {
//!     words.push(token.as_str().unwrap_or_default());
//! }
//! assert_eq!(words, ["bind", "mouse1", "+attack"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod numeric;
pub mod source;
pub mod token;
pub mod worldspawn;


pub use cursor::{Cursor, Tokens, parse_token, tokenize_all};
pub use numeric::{
    parse_float_or, parse_int_or, parse_next_float, parse_next_int, parse_u64_or, try_parse_float,
    try_parse_int, try_parse_u64,
};
pub use source::Source;
pub use token::{StopPolicy, Token};
pub use worldspawn::{extract_entity_property, parse_worldspawn_key};
