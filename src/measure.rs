//! More operations over the same closed set. None of these touch `Shape`,
//! `Circle` or `Square`; each is just another visitor.

use std::f64::consts::PI;

use crate::shape::{Shape, ShapeVisitor};
use crate::shapes::{Circle, Square};

pub struct Area;

impl ShapeVisitor for Area {
    type Output = f64;

    fn visit_circle(&mut self, circle: &Circle) -> f64 {
        PI * circle.radius() * circle.radius()
    }

    fn visit_square(&mut self, square: &Square) -> f64 {
        square.side() * square.side()
    }
}

pub struct Perimeter;

impl ShapeVisitor for Perimeter {
    type Output = f64;

    fn visit_circle(&mut self, circle: &Circle) -> f64 {
        2.0 * PI * circle.radius()
    }

    fn visit_square(&mut self, square: &Square) -> f64 {
        4.0 * square.side()
    }
}

/// Names the kind together with its dimension, e.g. `circle (radius 2)`.
pub struct Describe;

impl ShapeVisitor for Describe {
    type Output = String;

    fn visit_circle(&mut self, circle: &Circle) -> String {
        format!("circle (radius {})", circle.radius())
    }

    fn visit_square(&mut self, square: &Square) -> String {
        format!("square (side {})", square.side())
    }
}

pub fn total_area(shapes: &[Shape]) -> f64 {
    shapes.iter().map(|shape| shape.accept(&mut Area)).sum()
}
