//! Serial line monitor
//!
//! Polls a [`SerialLink`] for waiting input, reads one line at a time, and
//! writes each decoded line to an output stream, flushing after every line.
//! The loop runs until its [`CancelToken`] is triggered or an operation fails.

use crate::config;
use crate::core::codec::{DecodedLine, TextCodec};
use crate::core::transport::{SerialLink, TransportError};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Interrupt flag shared between a signal handler and the monitor loop
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Has a stop been requested?
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Monitor error types
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Serial link failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Writing to the output stream failed
    #[error("could not write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Outcome of a single poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll {
    /// No bytes were waiting
    Idle,
    /// One line was read and printed
    Line(DecodedLine),
}

/// Why the loop ended without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// The cancel token was triggered
    Interrupted,
}

/// Running counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorStats {
    /// Lines printed
    pub lines: u64,
    /// Raw bytes read from the link
    pub bytes_received: u64,
    /// Bytes discarded by the decoder
    pub bytes_dropped: u64,
}

/// Poll/read/print loop over one serial link
pub struct Monitor<L, W> {
    link: L,
    out: W,
    codec: TextCodec,
    cancel: CancelToken,
    idle_backoff: Option<Duration>,
    stats: MonitorStats,
}

impl<L: SerialLink, W: Write> Monitor<L, W> {
    /// Create a monitor that owns `link` and prints to `out`
    pub fn new(link: L, out: W, cancel: CancelToken) -> Self {
        Self {
            link,
            out,
            codec: TextCodec::new(),
            cancel,
            idle_backoff: config::IDLE_BACKOFF,
            stats: MonitorStats::default(),
        }
    }

    /// Sleep for `backoff` whenever no bytes are waiting
    #[must_use]
    pub fn idle_backoff(mut self, backoff: Option<Duration>) -> Self {
        self.idle_backoff = backoff;
        self
    }

    /// Counters collected so far
    pub fn stats(&self) -> MonitorStats {
        self.stats
    }

    /// Check for waiting input once; read and print a line if there is any
    pub fn poll_once(&mut self) -> Result<Poll, MonitorError> {
        if self.link.bytes_available()? == 0 {
            if let Some(backoff) = self.idle_backoff {
                std::thread::sleep(backoff);
            }
            return Ok(Poll::Idle);
        }

        let raw = self.link.read_line()?;
        let line = self.codec.decode_line(&raw);

        self.stats.lines += 1;
        self.stats.bytes_received += raw.len() as u64;
        self.stats.bytes_dropped += line.dropped as u64;

        if line.dropped > 0 {
            tracing::debug!("Dropped {} undecodable bytes", line.dropped);
        }
        tracing::trace!("Received {} bytes", raw.len());

        writeln!(self.out, "{}", line.text).map_err(MonitorError::Output)?;
        self.out.flush().map_err(MonitorError::Output)?;

        Ok(Poll::Line(line))
    }

    /// Poll until cancelled.
    ///
    /// Cancellation is checked before every poll, so it is observed within one
    /// read timeout. Any failure ends the loop immediately.
    pub fn run(&mut self) -> Result<Shutdown, MonitorError> {
        while !self.cancel.is_cancelled() {
            self.poll_once()?;
        }

        tracing::info!(
            "Monitor interrupted after {} lines ({} bytes, {} dropped)",
            self.stats.lines,
            self.stats.bytes_received,
            self.stats.bytes_dropped
        );
        Ok(Shutdown::Interrupted)
    }

    /// Hand back the link and the output stream
    pub fn into_parts(self) -> (L, W) {
        (self.link, self.out)
    }
}
