//! Layout module: pure width/spacing math shared by every block.
//!
//! Nothing here touches a terminal. These utilities are plain functions of
//! their inputs so the block variants stay trivially testable.

mod padding;
mod wrap;

pub use padding::Padding;
pub use wrap::{max_line_width, wrap_words};
