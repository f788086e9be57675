//! Text block: wraps a string to a width, aligns it, pads it.

use super::{Align, Block};
use crate::layout::{wrap_words, Padding};

/// A block of text, word-wrapped to fit the available width.
///
/// Padding participates in the wrap-width computation for every alignment,
/// but is only applied around the output for left-aligned text: centered
/// and right-aligned text is justified to the full wrap width instead and
/// the padding spec is otherwise ignored. That asymmetry is deliberate and
/// pinned by tests; compose a [`PaddedBlock`](super::PaddedBlock) around
/// the text if justified-and-padded output is needed.
#[derive(Debug, Clone)]
pub struct TextBlock {
    text: String,
    align: Align,
    padding: Padding,
}

impl TextBlock {
    /// Create a left-aligned, unpadded text block.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Left,
            padding: Padding::ZERO,
        }
    }

    /// Set the alignment.
    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the padding from any shorthand form.
    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Block for TextBlock {
    fn lines(&self, max_width: usize) -> Vec<String> {
        let wrap_width = max_width.saturating_sub(self.padding.horizontal());
        let wrapped = wrap_words(&self.text, wrap_width);

        match self.align {
            Align::Center => wrapped
                .into_iter()
                .map(|line| {
                    let extra = wrap_width.saturating_sub(line.chars().count());
                    let left = extra / 2;
                    format!("{}{line}{}", " ".repeat(left), " ".repeat(extra - left))
                })
                .collect(),
            Align::Right => wrapped
                .into_iter()
                .map(|line| {
                    let extra = wrap_width.saturating_sub(line.chars().count());
                    format!("{}{line}", " ".repeat(extra))
                })
                .collect(),
            Align::Left => self.padding.apply(wrapped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_align_wraps_without_justification() {
        let block = TextBlock::new("hello world");
        assert_eq!(block.lines(8), vec!["hello", "world"]);
    }

    #[test]
    fn center_align_justifies_to_wrap_width() {
        let block = TextBlock::new("hi").with_align(Align::Center);
        // Odd leftover space lands on the right.
        assert_eq!(block.lines(5), vec![" hi  "]);
    }

    #[test]
    fn right_align_justifies_to_wrap_width() {
        let block = TextBlock::new("hi").with_align(Align::Right);
        assert_eq!(block.lines(5), vec!["   hi"]);
    }

    #[test]
    fn left_align_applies_padding() {
        let block = TextBlock::new("hi").with_padding((1, 2));
        // Wrap width is 6 - 2 - 2 = 2; blank rows match the unpadded width.
        assert_eq!(block.lines(6), vec!["  ", "  hi  ", "  "]);
    }

    #[test]
    fn center_and_right_ignore_padding() {
        // Padding narrows the wrap width but is never applied around the
        // justified output.
        let centered = TextBlock::new("hi").with_align(Align::Center).with_padding((1, 1));
        assert_eq!(centered.lines(6), vec![" hi "]);

        let right = TextBlock::new("hi").with_align(Align::Right).with_padding((1, 1));
        assert_eq!(right.lines(6), vec!["  hi"]);
    }

    #[test]
    fn padding_wider_than_width_clamps_to_zero() {
        let block = TextBlock::new("hi").with_padding((0, 5));
        assert!(block.lines(4).is_empty());
    }

    #[test]
    fn zero_width_yields_nothing() {
        assert!(TextBlock::new("hello").lines(0).is_empty());
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(TextBlock::new("").lines(10).is_empty());
    }

    #[test]
    fn text_accessor_returns_content() {
        let block = TextBlock::new("hello").with_align(Align::Right);
        assert_eq!(block.text(), "hello");
    }

    #[test]
    fn long_word_is_hard_broken() {
        let block = TextBlock::new("abcdefgh");
        assert_eq!(block.lines(3), vec!["abc", "def", "gh"]);
    }
}
