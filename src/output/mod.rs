//! The console sink and the two file sinks render the same record
//! differently (styled vs. stripped) — the `Output` trait is the seam that
//! keeps the dispatcher indifferent to which is which.

mod console;
mod file;

pub use console::ConsoleOutput;
pub use file::FileOutput;

use crate::fmt::Ansi;
use crate::level::Level;
use chrono::Local;

/// Carries all data a sink needs to render one log line — avoids passing a
/// handful of loose parameters. Produced fresh per call and dropped after
/// dispatch; it has no identity beyond the moment of emission.
#[derive(Debug, Clone)]
pub struct Record {
    /// Taken once at creation so every sink renders the same instant and the
    /// two file sinks stay byte-identical per call.
    pub timestamp: String,
    pub level: Level,
    /// Primary message; may contain emphasis markers and the bypass prefix.
    pub message: String,
    /// Supplementary values, already stringified, appended after `join`.
    pub extra: Vec<String>,
    /// Rendered context object — frames the console line and prefixes the file line.
    pub context: Option<String>,
    /// Separator between the message and each supplementary value.
    pub join: String,
    /// Override color for the console body; file sinks never see it.
    pub color: Option<Ansi>,
}

impl Record {
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp(),
            level,
            message: message.into(),
            extra: Vec::new(),
            context: None,
            join: " ".to_string(),
            color: None,
        }
    }
}

/// Each sink renders the record according to its own format (ANSI or plain text).
pub trait Output {
    /// Renders and writes one line.
    ///
    /// # Errors
    /// I/O errors from the underlying sink (stdout, file).
    fn write(&self, record: &Record) -> Result<(), crate::Error>;

    /// Buffered sinks may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}

/// `DD.MM.YY HH:MM:SS.microseconds`.
fn timestamp() -> String {
    Local::now().format("%d.%m.%y %H:%M:%S%.6f").to_string()
}

/// Fixed column delimiter; file consumers parse on it.
pub(crate) const FIELD_SEP: &str = " ~ ";
