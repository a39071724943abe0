//! Construction opens file handles and emits the start marker — fallible
//! work that doesn't belong in loose constructor arguments.

use super::Logger;
use crate::fmt::{Ansi, MarkerMap};
use crate::level::Level;
use crate::output::{ConsoleOutput, FileOutput};
use std::path::PathBuf;

/// Builder for [`Logger`]. Defaults: both file sinks enabled under `logs/`,
/// minimum severity Info, `*`/`_` markers.
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    min_level: Level,
    historical: bool,
    session: bool,
    base_path: String,
    markers: MarkerMap,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            historical: true,
            session: true,
            base_path: "logs".to_string(),
            markers: MarkerMap::default(),
        }
    }

    /// Initial severity floor; adjustable later via [`Logger::set_level`].
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Enables or disables the historical sink (`<base>/log.log`, appended
    /// across process runs).
    #[must_use]
    pub const fn historical(mut self, enabled: bool) -> Self {
        self.historical = enabled;
        self
    }

    /// Enables or disables the session sink (`<base>/session.log`, truncated
    /// at each start).
    #[must_use]
    pub const fn session(mut self, enabled: bool) -> Self {
        self.session = enabled;
        self
    }

    /// Directory holding both log files. Tilde-expanded; must already exist.
    #[must_use]
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Adds or rebinds an emphasis marker for all sinks.
    #[must_use]
    pub fn marker(mut self, marker: char, style: Ansi) -> Self {
        self.markers = self.markers.with(marker, style);
        self
    }

    /// Opens the enabled file sinks and emits the start marker.
    ///
    /// # Errors
    /// Fails if an enabled log file cannot be opened — the base directory
    /// is not created on the caller's behalf.
    pub fn build(self) -> Result<Logger, crate::Error> {
        let base = PathBuf::from(shellexpand::tilde(&self.base_path).into_owned());

        let historical = if self.historical {
            Some(FileOutput::append(
                &base.join("log.log"),
                self.markers.clone(),
            )?)
        } else {
            None
        };
        let session = if self.session {
            Some(FileOutput::truncate(
                &base.join("session.log"),
                self.markers.clone(),
            )?)
        } else {
            None
        };

        let logger = Logger {
            min_level: self.min_level,
            console: ConsoleOutput::new(self.markers),
            historical,
            session,
            closed: false,
        };
        logger.info("--------Program start--------");
        Ok(logger)
    }
}
