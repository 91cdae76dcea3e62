//! The closed shape union and the visitor trait that dispatches over it.
//!
//! `Shape` lists every kind the program knows about. Operations are
//! visitors: one handler per variant, selected by an exhaustive `match` in
//! [`Shape::accept`]. Adding an operation means writing one new visitor;
//! adding a kind means touching `Shape` and every visitor, and the
//! compiler points at each of them.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::shapes::{Circle, Square};

// ============================================
// The union
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    Square(Square),
    // Adding a variant here breaks `accept` and `kind` until they handle it.
}

/// A collection of shapes in insertion order.
pub type Shapes = Vec<Shape>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Shape {
    /// Runs the handler of `visitor` that matches the variant held.
    pub fn accept<V: ShapeVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Shape::Circle(circle) => visitor.visit_circle(circle),
            Shape::Square(square) => visitor.visit_square(square),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Square(_) => ShapeKind::Square,
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Square> for Shape {
    fn from(square: Square) -> Self {
        Shape::Square(square)
    }
}

// ============================================
// The visitor
// ============================================

/// One operation over every shape kind. Both handlers return the same
/// `Output`.
pub trait ShapeVisitor {
    type Output;

    fn visit_circle(&mut self, circle: &Circle) -> Self::Output;
    fn visit_square(&mut self, square: &Square) -> Self::Output;
}

/// A visitor built from a pair of closures, one per kind.
pub struct Overload<C, S, T> {
    circle: C,
    square: S,
    _output: PhantomData<fn() -> T>,
}

impl<C, S, T> Overload<C, S, T>
where
    C: FnMut(&Circle) -> T,
    S: FnMut(&Square) -> T,
{
    pub fn new(circle: C, square: S) -> Self {
        Overload {
            circle,
            square,
            _output: PhantomData,
        }
    }
}

impl<C, S, T> ShapeVisitor for Overload<C, S, T>
where
    C: FnMut(&Circle) -> T,
    S: FnMut(&Square) -> T,
{
    type Output = T;

    fn visit_circle(&mut self, circle: &Circle) -> T {
        (self.circle)(circle)
    }

    fn visit_square(&mut self, square: &Square) -> T {
        (self.square)(square)
    }
}
