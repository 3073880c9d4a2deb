//! Data codec module for turning received bytes into printable lines
//!
//! Received data is treated as UTF-8 text. Bytes that do not form valid
//! UTF-8 are dropped rather than replaced, and decoding never fails.

mod text;

pub use text::{DecodedLine, TextCodec};
