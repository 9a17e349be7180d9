use super::{check_margin, LayoutError};
use crate::geometry::Rect;

/// Stack rectangles top-to-bottom, left-aligned at `x = margin`.
///
/// The construction is overlap-free by itself, so no collision checks are
/// needed. O(n), deterministic in input order. Assumes the enclosing folder's
/// top-left corner sits at the origin.
pub fn pack_vertical(rects: &mut [Rect], margin: f64) -> Result<(), LayoutError> {
    check_margin(margin)?;

    let mut current_y = margin;
    for rect in rects.iter_mut() {
        rect.top_left.x = margin;
        rect.top_left.y = current_y;
        current_y += rect.height + margin;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::pack_vertical;
    use crate::geometry::{Point2, Rect};
    use crate::layout::overlaps;

    #[test]
    fn stacks_with_margin_between_and_before() {
        let mut rects = vec![Rect::sized(5.0, 10.0), Rect::sized(5.0, 1.0)];
        pack_vertical(&mut rects, 2.0).unwrap();
        assert_eq!(rects[0].top_left, Point2::new(2.0, 2.0));
        assert_eq!(rects[1].top_left, Point2::new(2.0, 14.0));
    }

    #[test]
    fn output_is_margin_separated() {
        let mut rects = vec![
            Rect::sized(8.0, 3.0),
            Rect::sized(2.0, 7.0),
            Rect::sized(5.0, 5.0),
        ];
        pack_vertical(&mut rects, 1.5).unwrap();
        for i in 0..rects.len() {
            for j in 0..i {
                assert!(!overlaps(&rects[i], &rects[j], 1.5));
            }
        }
    }

    #[test]
    fn rejects_negative_margin() {
        let mut rects = vec![Rect::sized(1.0, 1.0)];
        assert!(pack_vertical(&mut rects, -1.0).is_err());
    }
}
