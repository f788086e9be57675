//! Padded block: spacing around a single child.

use super::Block;
use crate::layout::Padding;

/// Wraps one child block in blank-line and space padding.
///
/// The child is rendered at the width left over once horizontal padding is
/// subtracted, then the padding is applied around its lines. A child that
/// produces no lines produces no padding either.
pub struct PaddedBlock {
    child: Box<dyn Block>,
    padding: Padding,
}

impl PaddedBlock {
    /// Pad a child block; the shorthand accepts any CSS-style form.
    pub fn new(child: impl Block + 'static, padding: impl Into<Padding>) -> Self {
        Self {
            child: Box::new(child),
            padding: padding.into(),
        }
    }
}

impl Block for PaddedBlock {
    fn lines(&self, max_width: usize) -> Vec<String> {
        let inner_max_width = max_width.saturating_sub(self.padding.horizontal());
        self.padding.apply(self.child.lines(inner_max_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::TextBlock;

    #[test]
    fn pads_child_on_all_sides() {
        let block = PaddedBlock::new(TextBlock::new("hi"), 1);
        assert_eq!(block.lines(10), vec!["  ", " hi ", "  "]);
    }

    #[test]
    fn child_width_is_reduced_by_horizontal_padding() {
        let block = PaddedBlock::new(TextBlock::new("aaa bbb"), (0, 2));
        // Child wraps at 7 - 4 = 3 columns.
        assert_eq!(block.lines(7), vec!["  aaa  ", "  bbb  "]);
    }

    #[test]
    fn blank_rows_match_unpadded_child_width() {
        let block = PaddedBlock::new(TextBlock::new("abcd"), (1, 2, 1, 2));
        let lines = block.lines(20);
        assert_eq!(lines, vec!["    ", "  abcd  ", "    "]);
    }

    #[test]
    fn empty_child_stays_empty() {
        let block = PaddedBlock::new(TextBlock::new(""), 3);
        assert!(block.lines(20).is_empty());
    }

    #[test]
    fn padding_consuming_all_width_yields_nothing() {
        let block = PaddedBlock::new(TextBlock::new("hi"), (0, 4));
        assert!(block.lines(5).is_empty());
    }
}
