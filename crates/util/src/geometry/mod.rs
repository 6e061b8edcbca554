//! 2D geometry primitives.

mod point;
mod rectangle;
mod vector2d;

pub use point::{Point, Point2D};
pub use rectangle::Rectangle;
pub use vector2d::Vector2D;
