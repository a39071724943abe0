#![forbid(unsafe_code)]

//! `mdlog` - Leveled dual-sink logger with inline markdown-style emphasis.
//!
//! A small logging library with support for:
//! - Four severity levels with a runtime-adjustable minimum
//! - Inline emphasis markers (`*bold*`, `_underline_`) translated to ANSI
//!   on the console and stripped from file output
//! - Two optional file sinks: a historical log appended across runs and a
//!   session log truncated at each start
//! - Per-call supplements: extra values, a context object, a custom join
//!   separator, and an override color
//!
//! # Example
//!
//! ```
//! use mdlog::{Ansi, Level, Logger};
//!
//! let mut logger = Logger::builder()
//!     .historical(false)
//!     .session(false)
//!     .build()?;
//!
//! logger.info("Application started");
//! logger.warn("Connection timeout, *retrying*");
//!
//! logger
//!     .record(Level::Error, "Connection _failed_")
//!     .arg("retry=3")
//!     .color(Ansi::Blue)
//!     .emit();
//!
//! logger.set_level(Level::Warn);
//! logger.debug("now filtered");
//! # Ok::<(), mdlog::Error>(())
//! ```
//!
//! One logger instance per process: the sinks are plain file handles with no
//! locking, so duplicate instances against the same paths interleave freely.

pub mod config;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod output;

mod error;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::{Ansi, MarkerMap};
pub use level::Level;
pub use logger::{Call, Logger, LoggerBuilder};
pub use output::{ConsoleOutput, FileOutput, Output, Record};
