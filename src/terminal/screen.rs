//! `Screen`: renders blocks to a stream and erases them again.

use std::io::{self, Write};

use super::output::OutputBuffer;
use crate::block::Block;

/// Writes rendered blocks to an output stream and removes them with
/// cursor-movement escape sequences.
///
/// The writer is injected, so tests can drive a `Vec<u8>` instead of a real
/// terminal. Erasing is cursor-relative: call [`erase_last`] (or [`erase`]
/// with the exact count from the most recent render) before anything else
/// is written to the same region, or unrelated terminal content will be
/// clobbered. That ordering is the caller's responsibility.
///
/// [`erase`]: Screen::erase
/// [`erase_last`]: Screen::erase_last
pub struct Screen<W: Write> {
    writer: W,
    buffer: OutputBuffer,
    /// Line count of the most recent render, if any.
    last_height: Option<usize>,
}

impl<W: Write> Screen<W> {
    /// Create a screen over any writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: OutputBuffer::new(),
            last_height: None,
        }
    }

    /// Render a block at the given width, one line per row, in a single
    /// flush. Records and returns the number of lines printed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn render(&mut self, block: &dyn Block, width: usize) -> io::Result<usize> {
        let lines = block.lines(width);
        self.buffer.clear();
        for line in &lines {
            self.buffer.write_line(line);
        }
        self.buffer.flush_to(&mut self.writer)?;
        self.last_height = Some(lines.len());
        Ok(lines.len())
    }

    /// Erase `count` previously printed lines by moving the cursor up and
    /// clearing each row, in a single flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn erase(&mut self, count: usize) -> io::Result<()> {
        self.buffer.clear();
        for _ in 0..count {
            self.buffer.cursor_previous_line();
            self.buffer.clear_line();
        }
        self.buffer.flush_to(&mut self.writer)
    }

    /// Erase the lines of the most recent render, if there was one.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn erase_last(&mut self) -> io::Result<()> {
        match self.last_height.take() {
            Some(count) => self.erase(count),
            None => Ok(()),
        }
    }

    /// Line count of the most recent render, if any.
    pub const fn last_height(&self) -> Option<usize> {
        self.last_height
    }

    /// Consume the screen, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::TextBlock;

    #[test]
    fn render_prints_every_line_and_records_height() {
        let mut screen = Screen::new(Vec::new());
        let block = TextBlock::new("hello world");
        let printed = screen.render(&block, 5).unwrap();
        assert_eq!(printed, 2);
        assert_eq!(screen.last_height(), Some(2));
        assert_eq!(screen.into_writer(), b"hello\nworld\n");
    }

    #[test]
    fn erase_emits_one_pair_per_line() {
        let mut screen = Screen::new(Vec::new());
        screen.erase(2).unwrap();
        assert_eq!(screen.into_writer(), b"\x1b[F\x1b[2K\x1b[F\x1b[2K");
    }

    #[test]
    fn erase_last_uses_recorded_height_once() {
        let mut screen = Screen::new(Vec::new());
        let block = TextBlock::new("a b");
        screen.render(&block, 1).unwrap();
        screen.erase_last().unwrap();
        assert_eq!(screen.last_height(), None);
        // A second erase_last is a no-op.
        screen.erase_last().unwrap();
        let written = screen.into_writer();
        assert_eq!(written, b"a\nb\n\x1b[F\x1b[2K\x1b[F\x1b[2K");
    }

    #[test]
    fn empty_block_renders_nothing() {
        let mut screen = Screen::new(Vec::new());
        let block = TextBlock::new("");
        assert_eq!(screen.render(&block, 10).unwrap(), 0);
        assert!(screen.into_writer().is_empty());
    }
}
