//! TOML configuration loading.
//!
//! ```toml
//! [general]
//! level = "info"
//!
//! [file]
//! historical = true
//! session = true
//! base_path = "logs"
//! ```

use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger —
/// `#[serde(default)]` on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Severity filtering applies to all sinks — it belongs above any specific one.
    pub general: GeneralConfig,
    /// Which file sinks to open and where.
    pub file: FileConfig,
}

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable the historical sink (`log.log`, appended across runs).
    pub historical: bool,
    /// Enable the session sink (`session.log`, truncated per run).
    pub session: bool,
    /// Directory holding both log files.
    pub base_path: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            historical: true,
            session: true,
            base_path: "logs".to_string(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from the user's mdlog config directory. A missing
    /// file yields the defaults so zero-config setups work.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing
    /// hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from an explicit path instead of the default
    /// location. Useful for tests and non-standard deployments.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// An unknown level string falls back to Info rather than failing the
    /// whole logger construction.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_default()
    }

    fn config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "mdlog")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
