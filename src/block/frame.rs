//! Frame block: a titled border box around a single child.

use super::{Align, Block};
use crate::art::{BoxArt, ROUNDED};
use crate::layout::{max_line_width, Padding};

/// Wraps one child block in a border drawn from a [`BoxArt`] table, with an
/// optional title on the top border.
///
/// The box grows only as wide as the wider of its content and its title,
/// capped at the requested width; one column each side is reserved for the
/// vertical border glyphs. A request below two columns still yields a
/// minimal corner-only box rather than an error. Padding, when configured,
/// goes around the finished box: the border itself is never padded on the
/// inside.
pub struct FrameBlock {
    child: Box<dyn Block>,
    title: String,
    art: BoxArt,
    title_align: Align,
    padding: Padding,
}

impl FrameBlock {
    /// Frame a child block with the default rounded style and no title.
    pub fn new(child: impl Block + 'static) -> Self {
        Self {
            child: Box::new(child),
            title: String::new(),
            art: ROUNDED,
            title_align: Align::Center,
            padding: Padding::ZERO,
        }
    }

    /// Set the title shown on the top border.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the border style.
    #[must_use]
    pub fn with_art(mut self, art: BoxArt) -> Self {
        self.art = art;
        self
    }

    /// Set the title alignment on the top border.
    #[must_use]
    pub fn with_title_align(mut self, align: Align) -> Self {
        self.title_align = align;
        self
    }

    /// Set the padding around the finished box from any shorthand form.
    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    fn fill(&self, glyph: char, count: usize) -> String {
        std::iter::repeat(glyph).take(count).collect()
    }
}

impl Block for FrameBlock {
    fn lines(&self, max_width: usize) -> Vec<String> {
        let box_max_width = max_width.saturating_sub(self.padding.horizontal());
        // One column each side for the vertical border glyphs.
        let inner_max_width = box_max_width.saturating_sub(2);
        let inner_lines = self.child.lines(inner_max_width);

        let title_text = if self.title.is_empty() {
            String::new()
        } else {
            format!(" {} ", self.title)
        };

        let content_width = max_line_width(&inner_lines);
        let title_len = title_text.chars().count();
        let box_width = (content_width.max(title_len) + 2).min(box_max_width).max(2);
        let inner_width = box_width - 2;

        // Hard truncation, no ellipsis.
        let title_text: String = title_text.chars().take(inner_width).collect();
        let space = inner_width - title_text.chars().count();

        let top_line = match self.title_align {
            Align::Left => format!(
                "{}{title_text}{}{}",
                self.art.top_left,
                self.fill(self.art.top, space),
                self.art.top_right
            ),
            Align::Right => format!(
                "{}{}{title_text}{}",
                self.art.top_left,
                self.fill(self.art.top, space),
                self.art.top_right
            ),
            Align::Center => {
                let left = space / 2;
                format!(
                    "{}{}{title_text}{}{}",
                    self.art.top_left,
                    self.fill(self.art.top, left),
                    self.fill(self.art.top, space - left),
                    self.art.top_right
                )
            }
        };

        let bottom_line = format!(
            "{}{}{}",
            self.art.bottom_left,
            self.fill(self.art.bottom, inner_width),
            self.art.bottom_right
        );

        let mut out = Vec::with_capacity(inner_lines.len() + 2);
        out.push(top_line);
        for line in inner_lines {
            let deficit = inner_width.saturating_sub(line.chars().count());
            out.push(format!(
                "{}{line}{}{}",
                self.art.mid_left,
                " ".repeat(deficit),
                self.art.mid_right
            ));
        }
        out.push(bottom_line);
        self.padding.apply(out)
    }
}
