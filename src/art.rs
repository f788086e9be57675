//! `BoxArt`: glyph tables for drawing borders and dividers.
//!
//! A table is parsed from a compact 8-line template, one line per
//! conceptual border row:
//!
//! ```text
//! ╭─┬╮  top
//! │ ││  head
//! ├─┼┤  head divider
//! │ ││  mid
//! ├─┼┤  row divider
//! ├─┼┤  foot divider
//! │ ││  foot
//! ╰─┴╯  bottom
//! ```
//!
//! Each row contributes (left, fill, divider, right) glyphs, except the
//! head/mid/foot rows where the fill position is unused and discarded.
//! Only the top, mid, and bottom rows are consumed by [`FrameBlock`];
//! the divider rows are kept as a stable palette for multi-section table
//! rendering.
//!
//! [`FrameBlock`]: crate::block::FrameBlock

use crate::error::LayoutError;

/// A named set of border glyphs, immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct BoxArt {
    // top
    pub top_left: char,
    pub top: char,
    pub top_divider: char,
    pub top_right: char,
    // head
    pub head_left: char,
    pub head_vertical: char,
    pub head_right: char,
    // head divider
    pub head_row_left: char,
    pub head_row_horizontal: char,
    pub head_row_cross: char,
    pub head_row_right: char,
    // mid
    pub mid_left: char,
    pub mid_vertical: char,
    pub mid_right: char,
    // row divider
    pub row_left: char,
    pub row_horizontal: char,
    pub row_cross: char,
    pub row_right: char,
    // foot divider
    pub foot_row_left: char,
    pub foot_row_horizontal: char,
    pub foot_row_cross: char,
    pub foot_row_right: char,
    // foot
    pub foot_left: char,
    pub foot_vertical: char,
    pub foot_right: char,
    // bottom
    pub bottom_left: char,
    pub bottom: char,
    pub bottom_divider: char,
    pub bottom_right: char,
}

/// The default rounded-corner style.
pub const ROUNDED: BoxArt = BoxArt {
    top_left: '╭',
    top: '─',
    top_divider: '┬',
    top_right: '╮',
    head_left: '│',
    head_vertical: '│',
    head_right: '│',
    head_row_left: '├',
    head_row_horizontal: '─',
    head_row_cross: '┼',
    head_row_right: '┤',
    mid_left: '│',
    mid_vertical: '│',
    mid_right: '│',
    row_left: '├',
    row_horizontal: '─',
    row_cross: '┼',
    row_right: '┤',
    foot_row_left: '├',
    foot_row_horizontal: '─',
    foot_row_cross: '┼',
    foot_row_right: '┤',
    foot_left: '│',
    foot_vertical: '│',
    foot_right: '│',
    bottom_left: '╰',
    bottom: '─',
    bottom_divider: '┴',
    bottom_right: '╯',
};

/// The template [`ROUNDED`] is built from.
pub const ROUNDED_TEMPLATE: &str = "\
╭─┬╮
│ ││
├─┼┤
│ ││
├─┼┤
├─┼┤
│ ││
╰─┴╯";

impl BoxArt {
    /// Parse a table from an 8-line template of 4 characters per line.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the template does not have exactly
    /// 8 lines or any line does not have exactly 4 characters.
    pub fn parse(template: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = template.lines().collect();
        if lines.len() != 8 {
            return Err(LayoutError::ArtLineCount { lines: lines.len() });
        }

        let mut rows = [['\0'; 4]; 8];
        for (i, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            let quad: [char; 4] = chars
                .try_into()
                .map_err(|v: Vec<char>| LayoutError::ArtLineWidth { line: i, chars: v.len() })?;
            rows[i] = quad;
        }

        let [top, head, head_row, mid, row, foot_row, foot, bottom] = rows;

        Ok(Self {
            top_left: top[0],
            top: top[1],
            top_divider: top[2],
            top_right: top[3],
            head_left: head[0],
            head_vertical: head[2],
            head_right: head[3],
            head_row_left: head_row[0],
            head_row_horizontal: head_row[1],
            head_row_cross: head_row[2],
            head_row_right: head_row[3],
            mid_left: mid[0],
            mid_vertical: mid[2],
            mid_right: mid[3],
            row_left: row[0],
            row_horizontal: row[1],
            row_cross: row[2],
            row_right: row[3],
            foot_row_left: foot_row[0],
            foot_row_horizontal: foot_row[1],
            foot_row_cross: foot_row[2],
            foot_row_right: foot_row[3],
            foot_left: foot[0],
            foot_vertical: foot[2],
            foot_right: foot[3],
            bottom_left: bottom[0],
            bottom: bottom[1],
            bottom_divider: bottom[2],
            bottom_right: bottom[3],
        })
    }
}

impl Default for BoxArt {
    fn default() -> Self {
        ROUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_matches_its_template() {
        let parsed = BoxArt::parse(ROUNDED_TEMPLATE).unwrap();
        assert_eq!(parsed, ROUNDED);
    }

    #[test]
    fn parse_ascii_style() {
        let art = BoxArt::parse("+-++\n| ||\n+-++\n| ||\n+-++\n+-++\n| ||\n+-++").unwrap();
        assert_eq!(art.top_left, '+');
        assert_eq!(art.top, '-');
        assert_eq!(art.mid_vertical, '|');
        assert_eq!(art.bottom_right, '+');
    }

    #[test]
    fn parse_rejects_wrong_line_count() {
        let err = BoxArt::parse("╭─┬╮\n│ ││").unwrap_err();
        assert_eq!(err, LayoutError::ArtLineCount { lines: 2 });
    }

    #[test]
    fn parse_rejects_wrong_line_width() {
        let err = BoxArt::parse("╭─┬╮╮\n│ ││\n├─┼┤\n│ ││\n├─┼┤\n├─┼┤\n│ ││\n╰─┴╯").unwrap_err();
        assert_eq!(err, LayoutError::ArtLineWidth { line: 0, chars: 5 });
    }

    #[test]
    fn divider_rows_are_retained() {
        // Not consumed by FrameBlock, but part of the stable palette.
        assert_eq!(ROUNDED.head_row_cross, '┼');
        assert_eq!(ROUNDED.row_horizontal, '─');
        assert_eq!(ROUNDED.foot_row_left, '├');
    }
}
