//! Block trait and the block variants that implement it.
//!
//! A block is the only abstraction in the engine: given a maximum width it
//! produces a rectangle of text lines. Trees are built top-down from the
//! variants here and rendered bottom-up lazily; width is pushed down,
//! lines (and their implicit height) flow back up.

mod frame;
mod list;
mod padded;
mod text;

pub use frame::FrameBlock;
pub use list::ListBlock;
pub use padded::PaddedBlock;
pub use text::TextBlock;

/// A unit of layout that produces lines constrained to a maximum width.
///
/// Implementations must be pure: no I/O, no shared mutable state, the same
/// inputs always produce the same lines. Variants that compose children
/// return a rectangle — every line right-padded with spaces to one common
/// width — so downstream composition can join rows or attach side borders.
pub trait Block {
    /// Produce the block's lines for the given maximum width in characters.
    ///
    /// Degenerate widths (including zero) must yield empty or minimal
    /// output, never a panic.
    fn lines(&self, max_width: usize) -> Vec<String>;
}

impl<B: Block + ?Sized> Block for Box<B> {
    fn lines(&self, max_width: usize) -> Vec<String> {
        (**self).lines(max_width)
    }
}

impl<B: Block + ?Sized> Block for &B {
    fn lines(&self, max_width: usize) -> Vec<String> {
        (**self).lines(max_width)
    }
}

/// Horizontal placement of text within a width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Flush left (the default).
    #[default]
    Left,
    /// Centered, with any odd space on the right.
    Center,
    /// Flush right.
    Right,
}

/// Layout axis for a composite block.
///
/// `Auto` is never resolved once and cached: it is re-evaluated on every
/// `lines()` call, since a different `max_width` can flip the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Side-by-side, degrading to vertical if the children do not fit.
    Horizontal,
    /// Stacked top to bottom; never overridden.
    Vertical,
    /// Horizontal when the children fit, vertical otherwise (the default).
    #[default]
    Auto,
}
