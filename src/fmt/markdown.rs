//! Log messages sometimes need emphasis on specific words — single-character
//! markers (`*bold*`, `_underline_`) let users embed styling intent without
//! coupling to ANSI escape codes directly. The console sink translates
//! markers to escapes; the file sinks strip them.

use super::Ansi;

/// Messages starting with this prefix skip marker processing entirely;
/// the remainder is emitted verbatim, markers included.
pub const BYPASS_PREFIX: &str = "[nmd]";

/// Marker-character to style-code mapping. Fixed configuration: set once at
/// logger construction, never derived at runtime. Only single characters can
/// act as markers.
#[derive(Debug, Clone)]
pub struct MarkerMap {
    entries: Vec<(char, Ansi)>,
}

impl Default for MarkerMap {
    fn default() -> Self {
        Self {
            entries: vec![('*', Ansi::Bold), ('_', Ansi::Underline)],
        }
    }
}

impl MarkerMap {
    /// An empty map — every character passes through untouched.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds or replaces a marker. Later entries win so callers can rebind
    /// the default `*` and `_` markers.
    #[must_use]
    pub fn with(mut self, marker: char, style: Ansi) -> Self {
        self.entries.retain(|(c, _)| *c != marker);
        self.entries.push((marker, style));
        self
    }

    /// File-sink stripping only needs membership, not the style code.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.entries.iter().any(|(m, _)| *m == c)
    }

    fn style_for(&self, c: char) -> Option<Ansi> {
        self.entries
            .iter()
            .find(|(m, _)| *m == c)
            .map(|(_, style)| *style)
    }
}

/// Translates markers to ANSI escapes for console rendering.
///
/// Each marker is an independent toggle keyed by character identity: the
/// first occurrence opens (emits its style code), the second closes (emits a
/// full reset followed by every `ambient` code in the order given, so the
/// surrounding color survives the reset). Markers need not close in reverse
/// order of opening, and a marker left open simply leaves its style active —
/// ambient re-emission only happens on a close.
#[must_use]
pub fn to_ansi(msg: &str, markers: &MarkerMap, ambient: &[Ansi]) -> String {
    if let Some(rest) = msg.strip_prefix(BYPASS_PREFIX) {
        return rest.to_string();
    }

    let mut open: Vec<char> = Vec::new();
    let mut out = String::with_capacity(msg.len());
    for ch in msg.chars() {
        match markers.style_for(ch) {
            Some(style) => {
                if let Some(pos) = open.iter().position(|&c| c == ch) {
                    out.push_str(Ansi::RESET);
                    for code in ambient {
                        out.push_str(code.code());
                    }
                    open.remove(pos);
                } else {
                    out.push_str(style.code());
                    open.push(ch);
                }
            }
            None => out.push(ch),
        }
    }
    out
}

/// Removes markers for file rendering. No open/close tracking is needed
/// since no style codes are ever emitted.
#[must_use]
pub fn strip(msg: &str, markers: &MarkerMap) -> String {
    if let Some(rest) = msg.strip_prefix(BYPASS_PREFIX) {
        return rest.to_string();
    }

    msg.chars().filter(|c| !markers.contains(*c)).collect()
}
