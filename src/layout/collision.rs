use crate::geometry::Rect;

/// Margin-aware overlap test between two axis-aligned rectangles.
///
/// True iff the boxes, each notionally inflated by `margin / 2` on every side,
/// intersect with positive area — equivalently, iff the gap between any pair of
/// facing edges is smaller than `margin`. Edge-touching rectangles at zero
/// margin do not overlap.
pub fn overlaps(a: &Rect, b: &Rect, margin: f64) -> bool {
    a.left() < b.right() + margin
        && b.left() < a.right() + margin
        && a.top() < b.bottom() + margin
        && b.top() < a.bottom() + margin
}

#[cfg(test)]
mod tests {
    use super::overlaps;
    use crate::geometry::{Point2, Rect};

    #[test]
    fn separated_rects_do_not_overlap() {
        let a = Rect::sized(10.0, 10.0);
        let b = Rect::new(Point2::new(20.0, 0.0), 5.0, 5.0);
        assert!(!overlaps(&a, &b, 0.0));
        assert!(!overlaps(&a, &b, 5.0));
    }

    #[test]
    fn margin_inflates_the_test() {
        let a = Rect::sized(10.0, 10.0);
        let b = Rect::new(Point2::new(12.0, 0.0), 5.0, 5.0);
        // 2 units of horizontal gap
        assert!(!overlaps(&a, &b, 0.0));
        assert!(!overlaps(&a, &b, 2.0));
        assert!(overlaps(&a, &b, 2.5));
    }

    #[test]
    fn edge_touching_at_zero_margin_is_clear() {
        let a = Rect::sized(10.0, 10.0);
        let b = Rect::new(Point2::new(10.0, 0.0), 5.0, 5.0);
        assert!(!overlaps(&a, &b, 0.0));
    }

    #[test]
    fn containment_counts_as_overlap() {
        let a = Rect::sized(10.0, 10.0);
        let b = Rect::new(Point2::new(2.0, 2.0), 1.0, 1.0);
        assert!(overlaps(&a, &b, 0.0));
        assert!(overlaps(&b, &a, 0.0));
    }
}
