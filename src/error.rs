//! Error types for construction-time validation.
//!
//! Nothing in the layout core is fallible at render time: `lines()` always
//! succeeds. The only failures are malformed configuration caught while a
//! block or art table is being built.

use thiserror::Error;

/// A configuration error raised while constructing a block or art table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A padding shorthand had a shape other than 1, 2, or 4 values.
    #[error("padding shorthand must have 1, 2, or 4 values, got {len}")]
    PaddingShape {
        /// Number of values in the rejected shorthand.
        len: usize,
    },

    /// A box-art template had the wrong number of lines.
    #[error("box art template must have 8 lines, got {lines}")]
    ArtLineCount {
        /// Number of lines in the rejected template.
        lines: usize,
    },

    /// A box-art template line had the wrong number of characters.
    #[error("box art template line {line} must have 4 characters, got {chars}")]
    ArtLineWidth {
        /// Zero-based index of the offending line.
        line: usize,
        /// Number of characters on that line.
        chars: usize,
    },
}
