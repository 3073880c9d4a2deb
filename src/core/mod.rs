//! Core module containing the monitor functionality
//!
//! This module provides:
//! - Transport layer for the serial link
//! - Codec for turning received bytes into printable lines
//! - The poll/read/print monitor loop

pub mod codec;
pub mod monitor;
pub mod transport;
