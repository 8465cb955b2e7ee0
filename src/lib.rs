//! Gametext - Text handling for a game engine
//!
//! This crate re-exports all layers of the gametext system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: gametext_scanner    - Tokens, numeric conversions, entity key lookup
//!          gametext_info       - Info string codec, configstring validation
//! Layer 0: gametext_foundation - Error, InfoLimits, Span, text and path helpers
//! ```

pub use gametext_foundation as foundation;
pub use gametext_info as info;
pub use gametext_scanner as scanner;
