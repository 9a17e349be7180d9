use super::{check_margin, LayoutError};
use crate::geometry::Rect;

/// Alternating strip growth: each rectangle extends whichever bounding extent
/// (width or height) is currently shorter, keeping the overall shape close to
/// square with no collision search at all.
///
/// O(n) and backtrack-free. Known approximation: with very irregular sizes a
/// rectangle can land on a predecessor other than the one it was placed
/// against. Callers wanting a hard separation guarantee should pick one of the
/// grid or stack strategies instead.
pub fn pack_strip(rects: &mut [Rect], margin: f64) -> Result<(), LayoutError> {
    check_margin(margin)?;

    let mut max_width = -margin;
    let mut max_height = -margin;
    for rect in rects.iter_mut() {
        if max_width > max_height {
            // grow downward along the bottom edge
            rect.top_left.x = 0.0;
            rect.top_left.y = max_height + margin;
        } else {
            // grow rightward along the right edge
            rect.top_left.x = max_width + margin;
            rect.top_left.y = 0.0;
        }
        max_width = max_width.max(rect.right());
        max_height = max_height.max(rect.bottom());
    }
    Ok(())
}
