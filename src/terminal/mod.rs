//! Terminal module: the thin I/O edge around the pure layout core.
//!
//! Everything here is an external collaborator as far as layout is
//! concerned: blocks only ever see "give me a maximum width, get lines
//! back", and the screen only ever sees finished lines.

mod output;
mod screen;

pub use output::OutputBuffer;
pub use screen::Screen;

/// Width to assume when the terminal size cannot be detected.
pub const FALLBACK_WIDTH: usize = 80;

/// Detect the terminal width in columns, falling back to
/// [`FALLBACK_WIDTH`] when there is no terminal to ask.
pub fn detect_width() -> usize {
    crossterm::terminal::size().map_or(FALLBACK_WIDTH, |(width, _)| usize::from(width))
}
