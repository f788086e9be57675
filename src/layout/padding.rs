//! Padding: CSS-style shorthand for per-side spacing.

use crate::error::LayoutError;

/// Per-side spacing in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    /// Blank rows above the content.
    pub top: usize,
    /// Spaces appended to each content row.
    pub right: usize,
    /// Blank rows below the content.
    pub bottom: usize,
    /// Spaces prepended to each content row.
    pub left: usize,
}

impl Padding {
    /// Create a padding quad (top, right, bottom, left).
    #[inline]
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self { top, right, bottom, left }
    }

    /// No padding on any side.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// The same padding on all four sides.
    #[inline]
    pub const fn uniform(all: usize) -> Self {
        Self::new(all, all, all, all)
    }

    /// Symmetric padding: `vertical` on top/bottom, `horizontal` on left/right.
    #[inline]
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Normalize a runtime shorthand of 1, 2, or 4 values.
    ///
    /// One value applies to all sides; two are (vertical, horizontal);
    /// four are (top, right, bottom, left).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::PaddingShape`] for any other length.
    pub fn from_slice(values: &[usize]) -> Result<Self, LayoutError> {
        match *values {
            [all] => Ok(Self::uniform(all)),
            [vertical, horizontal] => Ok(Self::symmetric(vertical, horizontal)),
            [top, right, bottom, left] => Ok(Self::new(top, right, bottom, left)),
            _ => Err(LayoutError::PaddingShape { len: values.len() }),
        }
    }

    /// Total horizontal padding (left + right).
    #[inline]
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// Apply this padding around a rendered block of lines.
    ///
    /// Produces `top` blank rows, then each input line with `left` spaces
    /// prepended and `right` appended, then `bottom` blank rows. Blank rows
    /// match the widest *unpadded* input line, so they are narrower than the
    /// padded content rows by `left + right`. An empty input stays empty:
    /// no padding is manufactured around nothing.
    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        if lines.is_empty() || *self == Self::ZERO {
            return lines;
        }

        let content_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let blank = " ".repeat(content_width);

        let mut out = Vec::with_capacity(lines.len() + self.top + self.bottom);
        out.extend(std::iter::repeat_with(|| blank.clone()).take(self.top));
        for line in lines {
            let mut padded = String::with_capacity(line.len() + self.horizontal());
            padded.extend(std::iter::repeat(' ').take(self.left));
            padded.push_str(&line);
            padded.extend(std::iter::repeat(' ').take(self.right));
            out.push(padded);
        }
        out.extend(std::iter::repeat_with(|| blank.clone()).take(self.bottom));
        out
    }
}

impl From<usize> for Padding {
    #[inline]
    fn from(all: usize) -> Self {
        Self::uniform(all)
    }
}

impl From<[usize; 1]> for Padding {
    #[inline]
    fn from([all]: [usize; 1]) -> Self {
        Self::uniform(all)
    }
}

impl From<(usize, usize)> for Padding {
    #[inline]
    fn from((vertical, horizontal): (usize, usize)) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

impl From<(usize, usize, usize, usize)> for Padding {
    #[inline]
    fn from((top, right, bottom, left): (usize, usize, usize, usize)) -> Self {
        Self::new(top, right, bottom, left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_scalar() {
        assert_eq!(Padding::from(2), Padding::new(2, 2, 2, 2));
        assert_eq!(Padding::from([2]), Padding::new(2, 2, 2, 2));
    }

    #[test]
    fn shorthand_pair() {
        assert_eq!(Padding::from((1, 3)), Padding::new(1, 3, 1, 3));
    }

    #[test]
    fn shorthand_quad() {
        assert_eq!(Padding::from((1, 2, 3, 4)), Padding::new(1, 2, 3, 4));
    }

    #[test]
    fn from_slice_accepts_valid_shapes() {
        assert_eq!(Padding::from_slice(&[1]).unwrap(), Padding::uniform(1));
        assert_eq!(Padding::from_slice(&[1, 2]).unwrap(), Padding::symmetric(1, 2));
        assert_eq!(Padding::from_slice(&[1, 2, 3, 4]).unwrap(), Padding::new(1, 2, 3, 4));
    }

    #[test]
    fn from_slice_rejects_other_shapes() {
        assert_eq!(
            Padding::from_slice(&[1, 2, 3]).unwrap_err(),
            LayoutError::PaddingShape { len: 3 }
        );
        assert_eq!(
            Padding::from_slice(&[]).unwrap_err(),
            LayoutError::PaddingShape { len: 0 }
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let quad = Padding::from_slice(&[1, 2]).unwrap();
        let again =
            Padding::from_slice(&[quad.top, quad.right, quad.bottom, quad.left]).unwrap();
        assert_eq!(quad, again);
    }

    #[test]
    fn apply_pads_all_sides() {
        let padded = Padding::new(1, 2, 1, 1).apply(vec!["ab".into()]);
        assert_eq!(padded, vec!["  ", " ab  ", "  "]);
    }

    #[test]
    fn apply_blank_rows_use_unpadded_width() {
        // Blank rows match the widest input line, not the padded width.
        let padded = Padding::new(1, 3, 0, 3).apply(vec!["abcd".into(), "x".into()]);
        assert_eq!(padded[0], "    ");
        assert_eq!(padded[1], "   abcd   ");
        assert_eq!(padded[2], "   x   ");
    }

    #[test]
    fn apply_empty_input_stays_empty() {
        let padded = Padding::uniform(3).apply(Vec::new());
        assert!(padded.is_empty());
    }

    #[test]
    fn apply_zero_is_identity() {
        let lines = vec!["a".to_string(), "bb".to_string()];
        assert_eq!(Padding::ZERO.apply(lines.clone()), lines);
    }
}
