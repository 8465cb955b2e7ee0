//! Info strings: compact `\key\value` records for replicated game state.
//!
//! This crate provides:
//! - [`InfoBuffer`] - Caller-owned info string storage with overlap-safe splicing
//! - [`InfoCodec`] - Lookup, upsert, and removal with validation up front
//! - [`ValueRing`] - The two rotating output buffers behind
//!   [`InfoCodec::value_for_key`]
//! - [`validate`] - Key, value, info string, and configstring checks
//!
//! # Trust boundary
//!
//! Payloads received from the network must pass
//! [`validate_configstring`] and [`validate_info_string`] before anything
//! else touches them. [`InfoCodec::accept_payload`] runs both.
//!
//! ```
//! use gametext_info::{InfoBuffer, InfoCodec};
//!
//! let codec = InfoCodec::default();
//! let mut userinfo = InfoBuffer::new();
//! codec.set_value_for_key(&mut userinfo, "name", "bob")?;
//! codec.set_value_for_key(&mut userinfo, "hand", "2")?;
//! codec.set_value_for_key(&mut userinfo, "name", "alice")?;
//! assert_eq!(userinfo.as_str(), "\\hand\\2\\name\\alice");
//! assert_eq!(codec.find_value(userinfo.as_str(), "name")?, Some("alice"));
//! # Ok::<(), gametext_foundation::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod buffer;
pub mod codec;
pub mod ring;
pub mod validate;


pub use buffer::InfoBuffer;
pub use codec::{InfoCodec, Record, Records};
pub use ring::{VALUE_RING_LEN, ValueRing, ValueSlot};
pub use validate::{
    check_configstring, validate_configstring, validate_info_string, validate_key, validate_value,
};
