use std::ops::{Add, AddAssign};

/// A 2D point (or displacement) in world coordinates.
/// Pure value type: two points are the same point iff their coordinates match.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Round each component to the nearest integer.
    pub fn round(self) -> Self {
        Point2 {
            x: self.x.round(),
            y: self.y.round(),
        }
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2 {
    fn add_assign(&mut self, rhs: Point2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
