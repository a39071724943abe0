//! Severity levels that gate which messages reach the sinks.

use crate::fmt::Ansi;
use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a message's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Normal operational milestones — startup, shutdown, state changes.
    #[default]
    Info = 1,
    /// Development-time diagnostics, too noisy for normal operation.
    Debug = 2,
    /// Non-fatal anomalies that may need attention (retries, deprecated use).
    Warn = 3,
    /// Failures that may interrupt program execution.
    Error = 4,
}

impl Level {
    /// Lowercase because config files use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Padded to five characters so the `" ~ "`-delimited columns line up.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO ",
            Self::Debug => "DEBUG",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
        }
    }

    /// Console display color; `None` for Info, which renders in the metadata gray.
    #[must_use]
    pub const fn color(self) -> Option<Ansi> {
        match self {
            Self::Info => None,
            Self::Debug => Some(Ansi::White),
            Self::Warn => Some(Ansi::Yellow),
            Self::Error => Some(Ansi::Red),
        }
    }

    /// Convenience for iteration — used by tests and diagnostics.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Info, Self::Debug, Self::Warn, Self::Error]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
