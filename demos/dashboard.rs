//! Dashboard demo: builds a small widget tree, renders it at the detected
//! terminal width, then erases it again.
//!
//! Run with: `cargo run --example dashboard`

use std::io;
use std::thread;
use std::time::Duration;

use easel::terminal::detect_width;
use easel::{Align, Direction, FrameBlock, ListBlock, PaddedBlock, Screen, TextBlock};

fn main() -> io::Result<()> {
    let width = detect_width();

    let hello = TextBlock::new("Hello").with_padding((0, 1));
    let world = TextBlock::new("World!");
    let motto = TextBlock::new("width goes down, lines come back up").with_align(Align::Center);

    let column = ListBlock::new(Vec::new())
        .with_child(hello.clone())
        .with_child(world.clone())
        .with_child(hello.clone())
        .with_direction(Direction::Vertical);

    let row = ListBlock::new(Vec::new())
        .with_child(hello)
        .with_child(column)
        .with_child(world)
        .with_separator(" , ")
        .with_direction(Direction::Horizontal);

    let framed = FrameBlock::new(row)
        .with_title("Hello World")
        .with_title_align(Align::Left)
        .with_padding((1, 3));

    let dashboard = ListBlock::new(Vec::new())
        .with_child(framed)
        .with_child(PaddedBlock::new(motto, (1, 0)))
        .with_direction(Direction::Vertical);

    let mut screen = Screen::new(io::stdout());
    screen.render(&dashboard, width)?;

    thread::sleep(Duration::from_secs(2));
    screen.erase_last()
}
