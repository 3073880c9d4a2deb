//! Transport layer for the serial link
//!
//! The monitor only needs four things from a serial driver: open it, ask how
//! many bytes are waiting, read one line, close it. [`SerialLink`] covers the
//! last three; opening is done by the concrete transport.

mod serial;

pub use serial::{read_line_until, SerialConfig, SerialTransport, TimedRead};

use thiserror::Error;

/// Transport error types
#[derive(Error, Debug)]
pub enum TransportError {
    /// Device could not be opened
    #[error("could not open port {port}: {source}")]
    OpenFailed {
        /// Port name
        port: String,
        /// Driver error
        #[source]
        source: serialport::Error,
    },

    /// Driver-level failure on an open port
    #[error("{0}")]
    Driver(#[from] serialport::Error),

    /// I/O error
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// Not connected
    #[error("Not connected")]
    NotConnected,
}

/// Byte source the monitor polls
#[cfg_attr(test, mockall::automock)]
pub trait SerialLink {
    /// Number of bytes currently waiting in the input buffer
    fn bytes_available(&mut self) -> Result<u32, TransportError>;

    /// Read up to and including the next `\n`, or whatever arrived before the
    /// read timeout elapsed
    fn read_line(&mut self) -> Result<Vec<u8>, TransportError>;

    /// Release the device
    fn close(&mut self) -> Result<(), TransportError>;
}
