//! The drawing operation and the driver that applies it to a collection.

use std::io::{self, Write};

use tracing::debug;

use crate::shape::{Shape, ShapeVisitor};
use crate::shapes::{Circle, Square};

/// Writes one placeholder line per shape it visits. Only the kind is
/// written, never the dimensions.
pub struct Draw<W> {
    out: W,
}

impl<W: Write> Draw<W> {
    pub fn new(out: W) -> Self {
        Draw { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ShapeVisitor for Draw<W> {
    type Output = io::Result<()>;

    fn visit_circle(&mut self, _circle: &Circle) -> io::Result<()> {
        writeln!(self.out, "This is supposed to draw a circle...")
    }

    fn visit_square(&mut self, _square: &Square) -> io::Result<()> {
        writeln!(self.out, "This is supposed to draw a square...")
    }
}

/// Draws every shape front to back into `out`.
pub fn draw_all_shapes_to<W: Write>(out: &mut W, shapes: &[Shape]) -> io::Result<()> {
    debug!(count = shapes.len(), "drawing shapes");
    let mut draw = Draw::new(out);
    for shape in shapes {
        debug!(kind = %shape.kind(), "draw");
        shape.accept(&mut draw)?;
    }
    Ok(())
}

/// Draws every shape front to back on standard output.
pub fn draw_all_shapes(shapes: &[Shape]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    draw_all_shapes_to(&mut out, shapes)?;
    out.flush()
}
