//! Core types shared by every gametext layer.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with a fatal/recoverable classification
//! - [`InfoLimits`] - Configured bounds for info strings, keys, and values
//! - [`Span`] - Byte ranges into borrowed source text
//! - [`text`] and [`path`] - Small string and path helpers used by game code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod limits;
pub mod path;
pub mod span;
pub mod text;

pub use error::{Error, ErrorContext, ErrorKind, InfoViolation, Result};
pub use limits::{InfoLimits, MAX_INFO_KEY, MAX_INFO_STRING, MAX_INFO_VALUE};
pub use span::Span;
