//! Rendering is split by concern: the fixed ANSI palette and the marker
//! translator are independent pieces shared by the console and file sinks.

mod color;
pub mod markdown;

pub use color::Ansi;
pub use markdown::{BYPASS_PREFIX, MarkerMap, strip, to_ansi};
