//! CLI Module
//!
//! Drives one monitoring run: banner, open, loop, and exactly one closing
//! message. A clean interrupt ends with the farewell text and exit code 0;
//! anything else ends with `Error: <message>` and exit code 1.

pub mod exit_codes;

pub use exit_codes::{exit_code_description, CliResult, ExitCodes};

use crate::config;
use crate::core::monitor::{CancelToken, Monitor, MonitorError, Shutdown};
use crate::core::transport::{SerialConfig, SerialLink, TransportError};
use anyhow::Context;
use std::io::{self, Write};

/// Route Ctrl+C into `cancel`
pub fn install_interrupt_handler(cancel: CancelToken) -> anyhow::Result<()> {
    ctrlc::set_handler(move || cancel.cancel()).context("Failed to set Ctrl+C handler")
}

/// Write the two-line banner followed by a blank line
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", config::BANNER_TITLE)?;
    writeln!(out, "{}", config::BANNER_HINT)?;
    writeln!(out)?;
    out.flush()
}

/// Report a failure the way the user sees it
pub fn print_error<W: Write>(out: &mut W, message: &str) {
    if writeln!(out, "Error: {message}")
        .and_then(|()| out.flush())
        .is_err()
    {
        tracing::warn!("Could not write error message: {}", message);
    }
}

/// Run the monitor against the link produced by `open`.
///
/// On the interrupt path the farewell text is written and the link is closed.
/// On the failure path the link is not closed explicitly; it is released when
/// dropped.
pub fn run<L, W, F>(config: &SerialConfig, cancel: CancelToken, mut out: W, open: F) -> CliResult
where
    L: SerialLink,
    W: Write,
    F: FnOnce(&SerialConfig) -> Result<L, TransportError>,
{
    match monitor_until_interrupted(config, cancel, &mut out, open) {
        Ok(link) => finish_interrupted(link, out),
        Err(e) => {
            tracing::debug!("Monitor failed: {:?}", e);
            print_error(&mut out, &e.to_string());
            CliResult::from(e)
        }
    }
}

fn monitor_until_interrupted<L, W, F>(
    config: &SerialConfig,
    cancel: CancelToken,
    out: &mut W,
    open: F,
) -> Result<L, MonitorError>
where
    L: SerialLink,
    W: Write,
    F: FnOnce(&SerialConfig) -> Result<L, TransportError>,
{
    print_banner(out).map_err(MonitorError::Output)?;

    let link = open(config)?;
    tracing::info!("Monitoring {} at {} baud", config.port, config.baud_rate);

    let mut monitor = Monitor::new(link, &mut *out, cancel);
    match monitor.run()? {
        Shutdown::Interrupted => {
            let (link, _) = monitor.into_parts();
            Ok(link)
        }
    }
}

fn finish_interrupted<L: SerialLink, W: Write>(mut link: L, mut out: W) -> CliResult {
    if writeln!(out, "{}", config::FAREWELL)
        .and_then(|()| out.flush())
        .is_err()
    {
        tracing::warn!("Could not write farewell message");
    }

    if let Err(e) = link.close() {
        tracing::warn!("Failed to close serial port: {}", e);
    }

    CliResult::success()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::MockSerialLink;
    use std::time::Duration;

    fn test_config() -> SerialConfig {
        SerialConfig::new("/dev/ttyTEST0", 115_200, Duration::from_secs(1))
    }

    fn banner() -> String {
        format!("{}\n{}\n\n", config::BANNER_TITLE, config::BANNER_HINT)
    }

    #[test]
    fn test_open_failure_prints_single_error() {
        let mut out = Vec::new();
        let result = run(
            &test_config(),
            CancelToken::new(),
            &mut out,
            |config| -> Result<MockSerialLink, TransportError> {
                Err(TransportError::IoError(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("No such file or directory: {}", config.port),
                )))
            },
        );

        assert_eq!(result.code(), ExitCodes::ERROR);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            format!("{}Error: No such file or directory: /dev/ttyTEST0\n", banner())
        );
        assert_eq!(text.matches("Error: ").count(), 1);
    }

    #[test]
    fn test_interrupt_prints_farewell_and_closes() {
        let cancel = CancelToken::new();
        let trigger = cancel.clone();

        let mut link = MockSerialLink::new();
        link.expect_bytes_available().times(1).returning(|| Ok(7));
        link.expect_read_line().times(1).returning(move || {
            trigger.cancel();
            Ok(b"Hello\r\n".to_vec())
        });
        link.expect_close().times(1).returning(|| Ok(()));

        let mut out = Vec::new();
        let result = run(&test_config(), cancel, &mut out, move |_| Ok(link));

        assert!(result.is_success());
        assert_eq!(result.code(), ExitCodes::SUCCESS);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}Hello\n{}\n", banner(), config::FAREWELL)
        );
    }

    #[test]
    fn test_interrupt_exits_zero_even_if_close_fails() {
        let cancel = CancelToken::new();
        cancel.cancel();

        let mut link = MockSerialLink::new();
        link.expect_bytes_available().never();
        link.expect_close()
            .times(1)
            .returning(|| Err(TransportError::NotConnected));

        let result = run(&test_config(), cancel, io::sink(), move |_| Ok(link));
        assert_eq!(result.code(), ExitCodes::SUCCESS);
    }

    #[test]
    fn test_read_failure_does_not_close() {
        let mut link = MockSerialLink::new();
        link.expect_bytes_available().returning(|| Ok(1));
        link.expect_read_line().times(1).returning(|| {
            Err(TransportError::IoError(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "device reports readiness to read but returned no data",
            )))
        });
        link.expect_close().never();

        let mut out = Vec::new();
        let result = run(&test_config(), CancelToken::new(), &mut out, move |_| Ok(link));

        assert_eq!(result.code(), ExitCodes::ERROR);
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with(
            "Error: device reports readiness to read but returned no data\n"
        ));
        assert!(!text.contains(config::FAREWELL));
    }

    #[test]
    fn test_print_banner() {
        let mut out = Vec::new();
        print_banner(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), banner());
    }
}
