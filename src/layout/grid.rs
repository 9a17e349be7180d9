use super::{check_margin, LayoutError};
use crate::geometry::{Point2, Rect};

/// Grid positions for a batch of (width, height) dimensions: every cell is as
/// wide as the widest item and as tall as the tallest, with `columns =
/// ceil(sqrt(n))` so the block comes out roughly square. Items fill rows in
/// input order.
pub(crate) fn grid_positions(dims: &[(f64, f64)], margin: f64) -> Vec<Point2> {
    if dims.is_empty() {
        return Vec::new();
    }

    let cell_width = dims.iter().map(|d| d.0).fold(0.0, f64::max);
    let cell_height = dims.iter().map(|d| d.1).fold(0.0, f64::max);
    let columns = (dims.len() as f64).sqrt().ceil() as usize;

    (0..dims.len())
        .map(|i| {
            let col = i % columns;
            let row = i / columns;
            Point2::new(
                col as f64 * (cell_width + margin),
                row as f64 * (cell_height + margin),
            )
        })
        .collect()
}

/// Uniform-grid packing for a homogeneous batch (typically a folder of files
/// with no subfolders). Overlap-free by construction since the cell size
/// dominates every item. O(n); empty input is a no-op, not an error.
pub fn pack_grid(rects: &mut [Rect], margin: f64) -> Result<(), LayoutError> {
    check_margin(margin)?;

    let dims: Vec<(f64, f64)> = rects.iter().map(|r| (r.width, r.height)).collect();
    for (rect, pos) in rects.iter_mut().zip(grid_positions(&dims, margin)) {
        rect.top_left = pos;
    }
    Ok(())
}
