//! Closed-set polymorphism over shapes.
//!
//! `Shape` is an enum over every known kind; operations are visitors
//! dispatched through an exhaustive `match`. New operations are cheap (write
//! a visitor), new kinds are not (edit the enum and every visitor).
//!
//! Run with: cargo run --bin draw_shapes

pub mod draw;
pub mod error;
pub mod measure;
pub mod scene;
pub mod shape;
pub mod shapes;

pub use draw::{draw_all_shapes, draw_all_shapes_to, Draw};
pub use error::SceneError;
pub use measure::{total_area, Area, Describe, Perimeter};
pub use scene::{sample_shapes, Scene};
pub use shape::{Overload, Shape, ShapeKind, ShapeVisitor, Shapes};
pub use shapes::{Circle, Square};
