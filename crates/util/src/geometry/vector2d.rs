use serde::{Deserialize, Serialize};

use super::Point;

/// A 2D vector.
///
/// Mutating operations (`add`, `subtract`, `normalize`, `rotate`, `zero`)
/// work in place and return `&mut Self` for chaining. Their copy-returning
/// counterparts (`added`, `subtracted`, `normalized`, `rotated`) leave `self`
/// untouched. The arithmetic operators are copy-returning as well.
///
/// ```
/// use goodish_util::geometry::Vector2D;
///
/// let mut v = Vector2D::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
///
/// v.add(&Vector2D::new(1.0, 1.0)).normalize(10.0);
/// assert!((v.magnitude() - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_point(p: &impl Point) -> Self {
        Self::new(p.x(), p.y())
    }

    /// The vector pointing from `b` to `a`.
    pub fn from_points(a: &impl Point, b: &impl Point) -> Self {
        Self::new(a.x() - b.x(), a.y() - b.y())
    }

    pub fn mid_point(a: &impl Point, b: &impl Point) -> Self {
        Self::new((a.x() + b.x()) / 2.0, (a.y() + b.y()) / 2.0)
    }

    pub fn add(&mut self, v: &impl Point) -> &mut Self {
        self.x += v.x();
        self.y += v.y();
        self
    }

    pub fn subtract(&mut self, v: &impl Point) -> &mut Self {
        self.x -= v.x();
        self.y -= v.y();
        self
    }

    pub fn added(&self, v: &impl Point) -> Self {
        Self::new(self.x + v.x(), self.y + v.y())
    }

    pub fn subtracted(&self, v: &impl Point) -> Self {
        Self::new(self.x - v.x(), self.y - v.y())
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn dot(&self, v: &impl Point) -> f64 {
        self.x * v.x() + self.y * v.y()
    }

    /// Scale to magnitude `mag`. The zero vector is left as is.
    pub fn normalize(&mut self, mag: f64) -> &mut Self {
        let old = self.magnitude();
        if old != 0.0 {
            self.x = mag * self.x / old;
            self.y = mag * self.y / old;
        }
        self
    }

    pub fn normalized(&self, mag: f64) -> Self {
        let mut copy = *self;
        copy.normalize(mag);
        copy
    }

    pub fn zero(&mut self) -> &mut Self {
        self.x = 0.0;
        self.y = 0.0;
        self
    }

    /// Rotate counter-clockwise by `angle` radians.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let x = self.x;
        self.x = x * cos - self.y * sin;
        self.y = x * sin + self.y * cos;
        self
    }

    pub fn rotated(&self, angle: f64) -> Self {
        let mut copy = *self;
        copy.rotate(angle);
        copy
    }

    /// Heading in radians, measured from the positive x axis.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Heading of the vector from `v` to `self`.
    pub fn angle_between(&self, v: &impl Point) -> f64 {
        (self.y - v.y()).atan2(self.x - v.x())
    }

    /// This vector turned a quarter turn counter-clockwise.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl Point for Vector2D {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl std::ops::Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        self.added(&rhs)
    }
}

impl std::ops::Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        self.subtracted(&rhs)
    }
}

impl std::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        Vector2D::add(self, &rhs);
    }
}

impl std::ops::SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.subtract(&rhs);
    }
}

impl std::ops::Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}
