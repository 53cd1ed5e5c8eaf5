//! Logging for the Prism3D engine.
//!
//! - Customizable sink via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output with DefaultLogger
//! - NoOpLogger for hosts that don't want diagnostics
//!
//! There is no global logger. The engine owns an explicit sink and the
//! per-frame diagnostics (frame time, step dt) flow through it; logging
//! has no effect on behavior and may be a no-op.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route engine diagnostics elsewhere (file,
/// network, an on-screen overlay, etc.)
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "prism3d::Engine", "prism3d::FrameClock")
    pub source: String,

    /// Log message
    pub message: String,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose per-frame information (frame times, step dt)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues)
    Error,
}

impl LogEntry {
    /// Build an entry stamped with the current time.
    pub fn new(severity: LogSeverity, source: &str, message: String) -> Self {
        Self {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format: `[timestamp] [SEVERITY] [source] message`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        println!(
            "[{}] [{}] [{}] {}",
            timestamp,
            severity_str,
            entry.source.bright_blue(),
            entry.message
        );
    }
}

/// Logger that discards everything. The engine's default sink.
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: &LogEntry) {}
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
