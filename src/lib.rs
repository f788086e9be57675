//! # Easel
//!
//! A composable text-layout engine for terminal UIs.
//!
//! Easel builds rectangular blocks of text from a tree of composable
//! widgets. Width is pushed down the tree; lines flow back up. There is no
//! separate measure pass: each node asks its children for lines at a given
//! maximum width, then composes the result.
//!
//! ## Core Concepts
//!
//! - **Blocks**: everything implements one operation, `lines(max_width)`
//! - **Width-constrained wrapping**: greedy word wrap with hard breaks
//! - **Automatic arrangement**: lists pick horizontal or vertical layout
//!   based on what fits
//! - **Graceful degradation**: zero widths and empty children produce empty
//!   output, never a panic
//!
//! ## Example
//!
//! ```rust
//! use easel::{Block, FrameBlock, TextBlock};
//!
//! let text = TextBlock::new("hello world");
//! let framed = FrameBlock::new(text).with_title("Greeting");
//!
//! for line in framed.lines(40) {
//!     println!("{line}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod art;
pub mod block;
pub mod error;
pub mod layout;
pub mod terminal;

// Re-exports for convenience
pub use art::BoxArt;
pub use block::{Align, Block, Direction, FrameBlock, ListBlock, PaddedBlock, TextBlock};
pub use error::LayoutError;
pub use layout::Padding;
pub use terminal::Screen;
