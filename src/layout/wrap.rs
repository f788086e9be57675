//! Greedy word wrapping for width-constrained layout.
//!
//! Widths are counted in Unicode scalar values, not display cells. CJK
//! wide glyphs and zero-width combining marks therefore count as one
//! column each; this is a documented limitation of the engine, not a bug.

/// Wrap text into lines no wider than `max_width` characters.
///
/// Runs of whitespace (including newlines) collapse to single spaces and
/// lines break only at word boundaries, except that a single word wider
/// than `max_width` is hard-broken at character boundaries.
///
/// A `max_width` of zero yields no lines, whatever the input.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len: usize = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 {
            if current_len + 1 + word_len <= max_width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
                continue;
            }
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len <= max_width {
            current.push_str(word);
            current_len = word_len;
        } else {
            hard_break(word, max_width, &mut lines, &mut current, &mut current_len);
        }
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
}

/// Break a word wider than `max_width` into full-width chunks; the final
/// partial chunk stays open as the current line.
fn hard_break(
    word: &str,
    max_width: usize,
    lines: &mut Vec<String>,
    current: &mut String,
    current_len: &mut usize,
) {
    for c in word.chars() {
        if *current_len == max_width {
            lines.push(std::mem::take(current));
            *current_len = 0;
        }
        current.push(c);
        *current_len += 1;
    }
}

/// The width in characters of the widest line, 0 for no lines.
pub fn max_line_width(lines: &[String]) -> usize {
    lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}
