//! Leveled logging for docstore
//!
//! - Explicit severity levels with a threshold filter
//! - One log line = one event, written with a single call and flushed
//! - Error and Fatal go to stderr, everything else to stdout
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Finest-grained detail
    Trace = 0,
    /// Diagnostic detail
    Debug = 1,
    /// Normal operations
    Info = 2,
    /// Recoverable issues
    Warn = 3,
    /// Operation failures
    Error = 4,
    /// Unrecoverable, process exits
    Fatal = 5,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capability interface the store needs from a log sink.
///
/// Implementations must be shareable across threads; one driver instance
/// is expected to be used concurrently.
pub trait Logger: Send + Sync {
    /// Record one message at the given severity.
    fn log(&self, severity: Severity, message: &str);

    fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, message);
    }

    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    fn trace(&self, message: &str) {
        self.log(Severity::Trace, message);
    }
}

/// Console logger with a severity threshold.
///
/// Lines below the threshold are dropped. Error and Fatal lines are
/// routed to stderr so operational output on stdout stays parseable.
pub struct ConsoleLogger {
    min_severity: Severity,
}

impl ConsoleLogger {
    pub fn new(min_severity: Severity) -> Self {
        Self { min_severity }
    }

    /// Whether a message at `severity` clears the threshold.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    /// Formats one line and writes it with a single call.
    fn write_line<W: Write>(severity: Severity, message: &str, writer: &mut W) {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        let line = format!("[{}] {:5} {}\n", timestamp, severity.as_str(), message);
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

impl Default for ConsoleLogger {
    /// Info threshold, the default a driver gets when none is configured.
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, severity: Severity, message: &str) {
        if !self.enabled(severity) {
            return;
        }
        if severity >= Severity::Error {
            Self::write_line(severity, message, &mut io::stderr());
        } else {
            Self::write_line(severity, message, &mut io::stdout());
        }
    }
}

/// Log sink that collects entries in memory.
///
/// Records everything regardless of severity; tests and one-shot tools
/// inspect what the driver reported through it.
#[derive(Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether any entry at `severity` contains `needle`.
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|(s, m)| *s == severity && m.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, severity: Severity, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((severity, message.to_string()));
    }
}
