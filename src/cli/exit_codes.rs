//! CLI Exit Codes
//!
//! The monitor only distinguishes a clean interrupt from every other outcome.

use crate::core::monitor::MonitorError;
use std::process::ExitCode;

/// Exit code constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCodes;

impl ExitCodes {
    /// Clean interrupt
    pub const SUCCESS: u8 = 0;

    /// Any failure
    pub const ERROR: u8 = 1;
}

/// CLI operation result
#[derive(Debug)]
pub enum CliResult {
    /// Success with optional message
    Success(Option<String>),

    /// Error with code and message
    Error(u8, String),
}

impl CliResult {
    /// Success without a message
    pub fn success() -> Self {
        Self::Success(None)
    }

    /// General failure
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(ExitCodes::ERROR, msg.into())
    }

    /// Get exit code
    pub fn code(&self) -> u8 {
        match self {
            Self::Success(_) => ExitCodes::SUCCESS,
            Self::Error(code, _) => *code,
        }
    }

    /// Get message
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(Some(msg)) => Some(msg),
            Self::Error(_, msg) => Some(msg),
            _ => None,
        }
    }

    /// Convert to ExitCode
    pub fn to_exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    /// Is success?
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<MonitorError> for CliResult {
    fn from(err: MonitorError) -> Self {
        Self::error(err.to_string())
    }
}

impl From<anyhow::Error> for CliResult {
    fn from(err: anyhow::Error) -> Self {
        Self::error(format!("{err:#}"))
    }
}

/// Exit code description
pub fn exit_code_description(code: u8) -> &'static str {
    match code {
        0 => "Stopped by user",
        1 => "Error",
        _ => "Unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;

    #[test]
    fn test_cli_result() {
        let success = CliResult::success();
        assert!(success.is_success());
        assert_eq!(success.code(), 0);
        assert_eq!(success.message(), None);

        let error = CliResult::error("port vanished");
        assert!(!error.is_success());
        assert_eq!(error.code(), 1);
        assert_eq!(error.message(), Some("port vanished"));
    }

    #[test]
    fn test_from_monitor_error() {
        let err = MonitorError::Transport(TransportError::NotConnected);
        let result = CliResult::from(err);
        assert_eq!(result.code(), ExitCodes::ERROR);
        assert_eq!(result.message(), Some("Not connected"));
    }

    #[test]
    fn test_from_anyhow_keeps_context_chain() {
        let err = anyhow::anyhow!("signal handler already registered")
            .context("Failed to set Ctrl+C handler");
        let result = CliResult::from(err);
        assert_eq!(result.code(), ExitCodes::ERROR);
        assert_eq!(
            result.message(),
            Some("Failed to set Ctrl+C handler: signal handler already registered")
        );
    }

    #[test]
    fn test_exit_code_description() {
        assert_eq!(exit_code_description(ExitCodes::SUCCESS), "Stopped by user");
        assert_eq!(exit_code_description(ExitCodes::ERROR), "Error");
        assert_eq!(exit_code_description(42), "Unknown error");
    }
}
