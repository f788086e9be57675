//! List block: arranges child blocks stacked or side by side.

use super::{Block, Direction};
use crate::layout::{max_line_width, Padding};

/// An ordered list of child blocks arranged along one axis.
///
/// Children are all rendered at the full available width before the axis
/// is chosen; no width is reserved for separators or siblings up front.
/// This is an accepted approximation: with many wide children a composed
/// horizontal row can exceed the requested width.
pub struct ListBlock {
    children: Vec<Box<dyn Block>>,
    direction: Direction,
    separator: String,
    padding: Padding,
}

impl ListBlock {
    /// Create a list block with automatic direction and a single-space
    /// separator.
    pub fn new(children: Vec<Box<dyn Block>>) -> Self {
        Self {
            children,
            direction: Direction::Auto,
            separator: " ".to_string(),
            padding: Padding::ZERO,
        }
    }

    /// Append a child block.
    #[must_use]
    pub fn with_child(mut self, child: impl Block + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Set the layout direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the separator drawn between horizontal children.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the padding from any shorthand form.
    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Number of child blocks.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the list has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Join the children side by side, one output line per row.
    ///
    /// Shorter children are vertically centered with empty rows, each child
    /// is rectangularized to its own widest line, and the separator string
    /// appears only on the vertically-centered row; every other row joins
    /// with same-length spaces. The result is a "connector" look with the
    /// separator glyphs visible at mid-height only.
    fn compose_horizontal(&self, rendered: Vec<Vec<String>>) -> Vec<String> {
        let max_height = rendered.iter().map(Vec::len).max().unwrap_or(0);

        let columns: Vec<Vec<String>> = rendered
            .into_iter()
            .map(|lines| {
                let missing = max_height - lines.len();
                let mut padded: Vec<String> = Vec::with_capacity(max_height);
                padded.extend(std::iter::repeat_with(String::new).take(missing / 2));
                padded.extend(lines);
                padded.extend(std::iter::repeat_with(String::new).take((missing + 1) / 2));

                let width = max_line_width(&padded);
                for line in &mut padded {
                    let deficit = width - line.chars().count();
                    line.extend(std::iter::repeat(' ').take(deficit));
                }
                padded
            })
            .collect();

        let spacer = " ".repeat(self.separator.chars().count());
        let middle = max_height.saturating_sub(1) / 2;

        (0..max_height)
            .map(|row| {
                let cells: Vec<&str> = columns.iter().map(|col| col[row].as_str()).collect();
                let joint = if row == middle { self.separator.as_str() } else { spacer.as_str() };
                cells.join(joint)
            })
            .collect()
    }
}

impl Block for ListBlock {
    fn lines(&self, max_width: usize) -> Vec<String> {
        if self.children.is_empty() {
            return Vec::new();
        }

        let rendered: Vec<Vec<String>> =
            self.children.iter().map(|child| child.lines(max_width)).collect();

        let estimated_width = rendered.iter().map(|lines| max_line_width(lines)).sum::<usize>()
            + self.separator.chars().count() * (rendered.len() - 1);

        let layout = match self.direction {
            Direction::Auto | Direction::Horizontal if estimated_width > max_width => {
                Direction::Vertical
            }
            Direction::Auto => Direction::Horizontal,
            explicit => explicit,
        };

        let composed = if layout == Direction::Horizontal {
            self.compose_horizontal(rendered)
        } else {
            rendered.into_iter().flatten().collect()
        };

        self.padding.apply(composed)
    }
}
