//! Serial Monitor - prints lines arriving on a fixed serial port
//!
//! The device path, baud rate and timeouts are compiled in; the command line
//! only offers `--help` and `--version`.

use clap::Parser;
use serial_monitor::cli::{self, exit_code_description, CliResult};
use serial_monitor::{CancelToken, SerialConfig, SerialTransport};
use std::io;
use std::process::ExitCode;

/// Serial Monitor CLI
#[derive(Parser, Debug)]
#[command(
    name = "serial-monitor",
    version,
    about = "Print newline-terminated lines from a serial port until Ctrl+C",
    long_about = None
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    // Logs go to stderr; stdout carries only the monitor output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    tracing::info!("Starting serial-monitor v{}", serial_monitor::VERSION);

    let config = SerialConfig::fixed();
    let cancel = CancelToken::new();

    let result = match cli::install_interrupt_handler(cancel.clone()) {
        Ok(()) => cli::run(&config, cancel, io::stdout(), SerialTransport::open),
        Err(e) => {
            let result = CliResult::from(e);
            cli::print_error(&mut io::stdout(), result.message().unwrap_or_default());
            result
        }
    };

    tracing::debug!(
        "Exiting with {} ({})",
        result.code(),
        exit_code_description(result.code())
    );
    result.to_exit_code()
}
