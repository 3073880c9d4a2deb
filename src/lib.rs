//! # Serial Monitor Library
//!
//! A minimal serial terminal: opens one fixed serial device at 115200 baud,
//! reads newline-terminated lines, and prints them until interrupted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use serial_monitor::{cli, CancelToken, SerialConfig, SerialTransport};
//!
//! let cancel = CancelToken::new();
//! cli::install_interrupt_handler(cancel.clone()).unwrap();
//!
//! let result = cli::run(
//!     &SerialConfig::fixed(),
//!     cancel,
//!     std::io::stdout(),
//!     SerialTransport::open,
//! );
//! std::process::exit(i32::from(result.code()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;

// Re-exports for convenience
pub use crate::cli::{CliResult, ExitCodes};
pub use crate::core::codec::{DecodedLine, TextCodec};
pub use crate::core::monitor::{CancelToken, Monitor, MonitorError, MonitorStats, Poll, Shutdown};
pub use crate::core::transport::{SerialConfig, SerialLink, SerialTransport, TransportError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
