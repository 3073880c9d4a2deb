//! Fixed connection parameters
//!
//! The monitor is deliberately not configurable: the device, baud rate and
//! timeouts below are compiled in. Everything that needs them reads them
//! through [`SerialConfig::fixed`](crate::core::transport::SerialConfig::fixed).

use std::time::Duration;

/// Serial device the monitor attaches to
#[cfg(target_os = "macos")]
pub const DEVICE_PATH: &str = "/dev/cu.usbserial-0001";

/// Serial device the monitor attaches to
#[cfg(all(unix, not(target_os = "macos")))]
pub const DEVICE_PATH: &str = "/dev/ttyUSB0";

/// Serial device the monitor attaches to
#[cfg(windows)]
pub const DEVICE_PATH: &str = "COM3";

/// Baud rate of the link
pub const BAUD_RATE: u32 = 115_200;

/// Upper bound for a single line read
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Pause taken when no bytes are waiting.
///
/// `None` keeps the tight re-check loop.
pub const IDLE_BACKOFF: Option<Duration> = None;

/// Banner title line
pub const BANNER_TITLE: &str = "=== ESP32 Serial Port Monitor ===";

/// Banner hint line
pub const BANNER_HINT: &str = "Press Ctrl+C to exit";

/// Printed on clean interrupt
pub const FAREWELL: &str = "\n\nMonitoring stopped";
