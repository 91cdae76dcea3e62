//! Draws a circle, a square and another circle.

use std::io;

use shape_visitor::{draw_all_shapes, sample_shapes};
use tracing::Level;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let shapes = sample_shapes();
    draw_all_shapes(&shapes)
}
