//! Logger construction from mdlog config files.

use super::{Logger, LoggerBuilder};
use crate::config::Config;

impl Logger {
    /// Creates a logger from the default config file location, falling back
    /// to defaults when no config file exists.
    ///
    /// # Errors
    /// Fails on a malformed config file or when an enabled log file cannot
    /// be opened.
    pub fn from_config() -> Result<Self, crate::Error> {
        let config = Config::load()?;
        Self::from_config_with(&config)
    }

    /// Creates a logger from an already-loaded config.
    ///
    /// # Errors
    /// Fails when an enabled log file cannot be opened.
    pub fn from_config_with(config: &Config) -> Result<Self, crate::Error> {
        LoggerBuilder::new()
            .level(config.parse_level())
            .historical(config.file.historical)
            .session(config.file.session)
            .base_path(&config.file.base_path)
            .build()
    }
}
