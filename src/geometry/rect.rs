use super::point::Point2;

/// An axis-aligned rectangle: top-left corner plus positive width and height.
///
/// Layout strategies only ever rewrite `top_left`; `width` and `height` belong
/// to the owning tree node and stay fixed for the rectangle's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top_left: Point2,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top_left: Point2, width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "degenerate rect {width}x{height}");
        Rect {
            top_left,
            width,
            height,
        }
    }

    /// A rectangle of the given size at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Rect::new(Point2::ZERO, width, height)
    }

    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    pub fn right(&self) -> f64 {
        self.top_left.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top_left.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn translate(&mut self, delta: Point2) {
        self.top_left += delta;
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(Point2::new(left, top), right - left, bottom - top)
    }
}

/// Bounding box of a non-empty set of rectangles.
pub fn bounding(rects: &[Rect]) -> Option<Rect> {
    let (first, rest) = rects.split_first()?;
    Some(rest.iter().fold(*first, |acc, r| acc.union(r)))
}

#[cfg(test)]
mod tests {
    use super::{bounding, Rect};
    use crate::geometry::Point2;

    #[test]
    fn edge_accessors_derive_from_top_left_and_size() {
        let r = Rect::new(Point2::new(2.0, 3.0), 10.0, 4.0);
        assert_eq!(r.left(), 2.0);
        assert_eq!(r.top(), 3.0);
        assert_eq!(r.right(), 12.0);
        assert_eq!(r.bottom(), 7.0);
    }

    #[test]
    fn union_spans_both_rects() {
        let a = Rect::sized(10.0, 10.0);
        let b = Rect::new(Point2::new(12.0, -2.0), 1.0, 1.0);
        let u = a.union(&b);
        assert_eq!(u.left(), 0.0);
        assert_eq!(u.top(), -2.0);
        assert_eq!(u.right(), 13.0);
        assert_eq!(u.bottom(), 10.0);
    }

    #[test]
    fn bounding_of_empty_set_is_none() {
        assert!(bounding(&[]).is_none());
    }
}
