//! Plain-text rendering for the file sinks. Emphasis markers are stripped;
//! file content never contains ANSI escape sequences.

use super::{FIELD_SEP, Output, Record};
use crate::fmt::{MarkerMap, markdown};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// One open file handle. The historical sink appends across process runs;
/// the session sink truncates at construction and appends within the run.
/// The handle lives as long as the logger and closes when dropped.
#[derive(Debug)]
pub struct FileOutput {
    file: File,
    markers: MarkerMap,
}

impl FileOutput {
    /// Opens the historical sink. The parent directory must already exist.
    ///
    /// # Errors
    /// Propagates the open failure; there is no retry or fallback.
    pub fn append(path: &Path, markers: MarkerMap) -> Result<Self, crate::Error> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file, markers })
    }

    /// Opens the session sink, discarding the previous run's content.
    ///
    /// # Errors
    /// Propagates the open failure; there is no retry or fallback.
    pub fn truncate(path: &Path, markers: MarkerMap) -> Result<Self, crate::Error> {
        let file = File::create(path)?;
        Ok(Self { file, markers })
    }

    /// Renders the plain line: `timestamp ~ LABEL ~ [context ~ ]message[...]`.
    #[must_use]
    pub fn render(&self, record: &Record) -> String {
        let mut out = record.timestamp.clone();
        out.push_str(FIELD_SEP);
        out.push_str(record.level.label());
        out.push_str(FIELD_SEP);

        if let Some(ctx) = &record.context {
            out.push_str(ctx);
            out.push_str(FIELD_SEP);
        }

        out.push_str(&markdown::strip(&record.message, &self.markers));
        for value in &record.extra {
            out.push_str(&record.join);
            out.push_str(&markdown::strip(value, &self.markers));
        }

        out
    }
}

impl Output for FileOutput {
    fn write(&self, record: &Record) -> Result<(), crate::Error> {
        let mut line = self.render(record);
        line.push('\n');
        // Write impls exist on &File, so the shared handle stays usable from &self.
        (&self.file).write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (&self.file).flush()?;
        Ok(())
    }
}
