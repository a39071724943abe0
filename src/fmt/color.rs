//! Fixed ANSI palette used in the console. Codes from the same group
//! overwrite each other; `Ansi::RESET` falls back to the terminal default.

use std::fmt;

/// A closed set of escape codes instead of free-form strings — an override
/// color passed per call can only ever be one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ansi {
    // colors
    Black,
    Gray,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,

    // backgrounds
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,

    // decorations
    Bold,
    Underline,
    Reversed,
}

impl Ansi {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// `const` so marker maps and level colors can be compile-time constants.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Gray => "\x1b[38;5;240m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::BgBlack => "\x1b[40;1m",
            Self::BgRed => "\x1b[41;1m",
            Self::BgGreen => "\x1b[42;1m",
            Self::BgYellow => "\x1b[43;1m",
            Self::BgBlue => "\x1b[44;1m",
            Self::BgMagenta => "\x1b[45;1m",
            Self::BgCyan => "\x1b[46;1m",
            Self::BgWhite => "\x1b[47;1m",
            Self::Bold => "\x1b[1m",
            Self::Underline => "\x1b[4m",
            Self::Reversed => "\x1b[7m",
        }
    }
}

impl fmt::Display for Ansi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
