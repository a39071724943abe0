//! The dispatcher: one severity gate in front of the console and the two
//! optional file sinks. A call either reaches every enabled sink or none.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::fmt::Ansi;
use crate::level::Level;
use crate::output::{ConsoleOutput, FileOutput, Output, Record};
use std::fmt;

/// Leveled logger writing to the console and up to two file sinks.
///
/// Intended as one instance per process. The sinks carry no locking:
/// concurrent writers, including a second `Logger` opened on the same
/// paths, interleave output freely and are out of contract.
pub struct Logger {
    min_level: Level,
    console: ConsoleOutput,
    historical: Option<FileOutput>,
    session: Option<FileOutput>,
    closed: bool,
}

impl Logger {
    /// Opening the sinks takes configuration a constructor signature would
    /// bloat on — the builder provides a guided API instead.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Raises or lowers the severity floor for all subsequent calls.
    pub const fn set_level(&mut self, level: Level) {
        self.min_level = level;
    }

    /// Tests and diagnostics need to verify which severity threshold is active.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Normal operational milestones — startup, shutdown, state changes.
    pub fn info(&self, msg: &str) {
        self.emit(Record::new(Level::Info, msg));
    }

    /// Development-time diagnostics, too noisy for normal operation.
    pub fn debug(&self, msg: &str) {
        self.emit(Record::new(Level::Debug, msg));
    }

    /// Non-fatal anomalies — retries, deprecated features, recoverable errors.
    pub fn warn(&self, msg: &str) {
        self.emit(Record::new(Level::Warn, msg));
    }

    /// Failures that may interrupt program execution.
    pub fn error(&self, msg: &str) {
        self.emit(Record::new(Level::Error, msg));
    }

    /// Per-call supplements (extra values, context, join separator, override
    /// color) go through a call builder; `Call::emit` dispatches.
    #[must_use]
    pub fn record(&self, level: Level, msg: impl Into<String>) -> Call<'_> {
        Call {
            logger: self,
            record: Record::new(level, msg),
        }
    }

    /// Core dispatch — one integer comparison gates the whole pipeline, so
    /// suppressed calls cost nothing beyond it. Sink write failures are
    /// best-effort and not surfaced per call.
    pub(crate) fn emit(&self, record: Record) {
        if record.level < self.min_level {
            return;
        }

        let _ = self.console.write(&record);
        self.write_files(record);
    }

    fn write_files(&self, record: Record) {
        if self.historical.is_none() && self.session.is_none() {
            return;
        }

        // File lines always carry the INFO label regardless of call severity,
        // matching the historical on-disk format. Override colors never reach
        // files either way.
        let record = Record {
            level: Level::Info,
            color: None,
            ..record
        };

        if let Some(historical) = &self.historical {
            let _ = historical.write(&record);
        }
        if let Some(session) = &self.session {
            let _ = session.write(&record);
        }
    }

    /// Flushes every enabled sink.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all sinks.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.console.flush()?;
        if let Some(historical) = &self.historical {
            historical.flush()?;
        }
        if let Some(session) = &self.session {
            session.flush()?;
        }
        Ok(())
    }

    /// Emits the end marker and closes the file handles. Runs at most once;
    /// `Drop` calls it, so an explicit call is only needed to end a session
    /// before the logger goes out of scope.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        self.info("--------Program end--------");
        let _ = self.flush();
        self.historical = None;
        self.session = None;
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("historical", &self.historical.is_some())
            .field("session", &self.session.is_some())
            .finish_non_exhaustive()
    }
}

/// One pending log call. Dropping it without `emit` discards the call.
#[must_use = "a call does nothing until emitted"]
pub struct Call<'a> {
    logger: &'a Logger,
    record: Record,
}

impl Call<'_> {
    /// Appends one supplementary value, stringified, after the join separator.
    pub fn arg(mut self, value: impl ToString) -> Self {
        self.record.extra.push(value.to_string());
        self
    }

    /// References an object instance to locate the call site and distinguish
    /// instances. Rendered via `Debug` into the metadata columns.
    pub fn context(mut self, obj: &impl fmt::Debug) -> Self {
        self.record.context = Some(format!("{obj:?}"));
        self
    }

    /// Separator between the message and each supplementary value.
    pub fn join(mut self, sep: impl Into<String>) -> Self {
        self.record.join = sep.into();
        self
    }

    /// Console-only override color; becomes the ambient color for the body.
    pub fn color(mut self, color: Ansi) -> Self {
        self.record.color = Some(color);
        self
    }

    /// Runs the call through the severity gate and the sinks.
    pub fn emit(self) {
        self.logger.emit(self.record);
    }
}
