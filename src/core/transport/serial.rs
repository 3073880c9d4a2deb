//! Serial port transport implementation

use super::{SerialLink, TransportError};
use crate::config;
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::{self, ErrorKind, Read};
use std::time::{Duration, Instant};

/// Serial port configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    /// Port name (e.g., COM3, /dev/ttyUSB0)
    pub port: String,
    /// Baud rate
    pub baud_rate: u32,
    /// Read timeout
    pub timeout: Duration,
}

impl SerialConfig {
    /// Create a new serial configuration
    pub fn new(port: &str, baud_rate: u32, timeout: Duration) -> Self {
        Self {
            port: port.to_string(),
            baud_rate,
            timeout,
        }
    }

    /// The compiled-in connection parameters
    pub fn fixed() -> Self {
        Self::new(config::DEVICE_PATH, config::BAUD_RATE, config::READ_TIMEOUT)
    }
}

/// Serial port transport
pub struct SerialTransport {
    config: SerialConfig,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialTransport {
    /// Open the port described by `config` (8N1, no flow control)
    pub fn open(config: &SerialConfig) -> Result<Self, TransportError> {
        let port = serialport::new(&config.port, config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.timeout)
            .open()
            .map_err(|source| TransportError::OpenFailed {
                port: config.port.clone(),
                source,
            })?;

        tracing::debug!("Opened {} at {} baud", config.port, config.baud_rate);

        Ok(Self {
            config: config.clone(),
            port: Some(port),
        })
    }

    fn port_mut(&mut self) -> Result<&mut Box<dyn SerialPort>, TransportError> {
        self.port.as_mut().ok_or(TransportError::NotConnected)
    }
}

impl SerialLink for SerialTransport {
    fn bytes_available(&mut self) -> Result<u32, TransportError> {
        Ok(self.port_mut()?.bytes_to_read()?)
    }

    fn read_line(&mut self) -> Result<Vec<u8>, TransportError> {
        let timeout = self.config.timeout;
        let port = self.port_mut()?;
        Ok(read_line_until(port, timeout)?)
    }

    fn close(&mut self) -> Result<(), TransportError> {
        match self.port.take() {
            Some(port) => {
                drop(port);
                tracing::debug!("Closed {}", self.config.port);
                Ok(())
            }
            None => Err(TransportError::NotConnected),
        }
    }
}

/// Byte source whose per-read timeout can be changed between reads
pub trait TimedRead: Read {
    /// Bound the next `read` call to `timeout`
    fn set_read_timeout(&mut self, timeout: Duration) -> io::Result<()>;
}

impl TimedRead for Box<dyn SerialPort> {
    fn set_read_timeout(&mut self, timeout: Duration) -> io::Result<()> {
        Ok(self.set_timeout(timeout)?)
    }
}

/// Read bytes one at a time until `\n` (kept in the result), end of input, or
/// until `timeout` has passed since the call started.
///
/// Every single-byte read is bounded by the time left before the deadline, so
/// the whole call never outlasts `timeout`. A `TimedOut` error from the reader
/// ends the line with whatever was collected so far; it is not reported as an
/// error.
pub fn read_line_until<R: TimedRead + ?Sized>(
    reader: &mut R,
    timeout: Duration,
) -> io::Result<Vec<u8>> {
    let deadline = Instant::now() + timeout;
    let mut line = Vec::new();
    let mut byte = [0u8; 1];

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        reader.set_read_timeout(remaining)?;

        match reader.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                line.push(byte[0]);
                if byte[0] == b'\n' {
                    break;
                }
            }
            Err(ref e) if e.kind() == ErrorKind::TimedOut => break,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(line)
}
