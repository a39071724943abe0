//! Styled rendering for the console stream. Metadata (timestamp, label,
//! context frame) is gray; the message body runs in the ambient color —
//! the severity's color, or the per-call override when one is given.

use super::{FIELD_SEP, Output, Record};
use crate::fmt::{Ansi, MarkerMap, markdown};
use std::io::{self, Write};

/// Console sink; renders with ANSI escapes and writes to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleOutput {
    markers: MarkerMap,
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new(MarkerMap::default())
    }
}

impl ConsoleOutput {
    #[must_use]
    pub const fn new(markers: MarkerMap) -> Self {
        Self { markers }
    }

    /// Assembles the full styled line — the rendering hot path for every
    /// console log call. Public so the output can be inspected without
    /// capturing stdout.
    #[must_use]
    pub fn render(&self, record: &Record) -> String {
        let mut out = String::from(Ansi::Gray.code());
        let mut ambient = vec![Ansi::Gray];

        // With a context reference the message becomes a framed block.
        if record.context.is_some() {
            out.push_str("-----\n");
        }
        out.push_str(&record.timestamp);
        out.push_str(FIELD_SEP);

        if let Some(color) = record.level.color() {
            out.push_str(color.code());
            ambient = vec![color];
        }
        out.push_str(record.level.label());
        out.push_str(FIELD_SEP);

        if let Some(color) = record.color {
            ambient = vec![color];
            out.push_str(color.code());
        }

        if let Some(ctx) = &record.context {
            out.push_str(Ansi::Gray.code());
            out.push_str(ctx);
            for code in &ambient {
                out.push_str(code.code());
            }
            out.push('\n');
        }

        out.push_str(&markdown::to_ansi(&record.message, &self.markers, &ambient));
        for value in &record.extra {
            out.push_str(&record.join);
            out.push_str(&markdown::to_ansi(value, &self.markers, &ambient));
        }

        if record.context.is_some() {
            out.push_str(Ansi::Gray.code());
            out.push_str("\n-----");
            out.push_str(Ansi::RESET);
        }

        out
    }
}

impl Output for ConsoleOutput {
    fn write(&self, record: &Record) -> Result<(), crate::Error> {
        writeln!(io::stdout(), "{}", self.render(record))?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}
