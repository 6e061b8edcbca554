use serde::{Deserialize, Serialize};

use super::Point;

/// Axis-aligned rectangle stored as its origin plus its far edges.
///
/// `left`/`top` alias the origin. Setting the width or height moves the far
/// edge (`right`/`bottom`) relative to the origin; moving the origin alone
/// leaves the far edges where they are.
///
/// Containment and intersection treat each axis as the half-open interval
/// `[near, far)`.
///
/// # Examples
///
/// ```
/// use goodish_util::geometry::{Point2D, Rectangle};
///
/// let mut rect = Rectangle::new(0.0, 0.0, 10.0, 5.0);
/// assert!(rect.contains(&Point2D::new(0.0, 0.0)));
/// assert!(!rect.contains(&Point2D::new(10.0, 0.0)));
///
/// rect.set_width(20.0);
/// assert_eq!(rect.right, 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            right: x + width,
            bottom: y + height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn set_left(&mut self, value: f64) {
        self.x = value;
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn set_top(&mut self, value: f64) {
        self.y = value;
    }

    pub fn width(&self) -> f64 {
        self.right - self.left()
    }

    pub fn set_width(&mut self, value: f64) {
        self.right = self.x + value;
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top()
    }

    pub fn set_height(&mut self, value: f64) {
        self.bottom = self.y + value;
    }

    /// Whether the two rectangles overlap with a non-empty area.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        other.left() < self.right
            && other.right > self.left()
            && other.top() < self.bottom
            && other.bottom > self.top()
    }

    /// Whether `point` lies inside the rectangle.
    pub fn contains(&self, point: &impl Point) -> bool {
        point.x() >= self.left()
            && point.x() < self.right
            && point.y() >= self.top()
            && point.y() < self.bottom
    }
}
