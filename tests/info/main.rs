//! Integration tests for Layer 1: Info strings
//!
//! Tests for the info string codec, the value ring, and validation.

mod codec;
