use super::{check_margin, overlaps, LayoutError};
use crate::geometry::{Point2, Rect};

/// Single-anchor greedy packing toward the bottom-right.
///
/// A cheaper cousin of [`pack_greedy`](super::pack_greedy): instead of scoring
/// a placement against every rectangle placed so far, it keeps one anchor and
/// appends to whichever bounding extent is currently smaller — right of the
/// anchor when the layout is taller than wide, below it otherwise. Collisions
/// are cleared by sliding along a single axis. The anchor advances to the new
/// rectangle whenever it extends the winning extent.
///
/// O(n²) overall and less area-efficient than the full greedy search; like
/// Fast Strip, margin separation is only guaranteed against the rectangles a
/// candidate actually slid past.
pub fn pack_right_bottom(rects: &mut [Rect], margin: f64) -> Result<(), LayoutError> {
    check_margin(margin)?;
    if rects.is_empty() {
        return Err(LayoutError::invalid(
            "right-bottom layout requires at least one rectangle",
        ));
    }

    rects[0].top_left = Point2::ZERO;
    let mut placed = vec![rects[0]];
    let mut width = rects[0].width;
    let mut height = rects[0].height;
    let mut anchor = 0usize;

    for i in 1..rects.len() {
        let origin = placed[anchor];
        let mut rect = rects[i];

        if width < height {
            // widen: append right of the anchor, slide down until clear
            rect.top_left = Point2::new(origin.right() + margin, origin.top());
            while let Some(hit) = placed.iter().find(|&p| overlaps(&rect, p, 0.0)) {
                rect.top_left.y = hit.bottom() + margin;
            }
            if rect.right() > width {
                width = rect.right();
                anchor = i;
            }
        } else {
            // deepen: append below the anchor, slide right until clear
            rect.top_left = Point2::new(origin.left(), origin.bottom() + margin);
            while let Some(hit) = placed.iter().find(|&p| overlaps(&rect, p, 0.0)) {
                rect.top_left.x = hit.right() + margin;
            }
            if rect.bottom() > height {
                height = rect.bottom();
                anchor = i;
            }
        }

        rects[i].top_left = rect.top_left;
        placed.push(rect);
    }
    Ok(())
}
