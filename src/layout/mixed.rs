use super::grid::grid_positions;
use super::{check_margin, LayoutError, NodeKind};
use crate::geometry::{Point2, Rect};

/// Height above which the original geometry-based heuristic called an item a
/// folder. File cards are exactly this tall, so anything taller had to be a
/// folder wrapping its own children.
pub const FOLDER_HEIGHT_THRESHOLD: f64 = 100.0;

/// Compatibility shim for callers that have no explicit classification and
/// need layout parity with the geometry-based rule. Anything taller than the
/// threshold is called a folder, regardless of what it really is — prefer
/// passing real [`NodeKind`]s to [`pack_mixed`].
pub fn classify_by_height(height: f64) -> NodeKind {
    if height > FOLDER_HEIGHT_THRESHOLD {
        NodeKind::Folder
    } else {
        NodeKind::File
    }
}

/// Two-zone layout for folders that contain both files and subfolders.
///
/// Subfolders are grid-packed into a block at the top; files are grid-packed
/// independently and the whole file block is translated to sit below the
/// folder block, left-aligned with its leftmost folder. `kinds` runs parallel
/// to `rects`; both classes must be present or the reference min/max over the
/// folder block has no defined result.
pub fn pack_mixed(
    rects: &mut [Rect],
    kinds: &[NodeKind],
    margin: f64,
) -> Result<(), LayoutError> {
    check_margin(margin)?;
    if kinds.len() != rects.len() {
        return Err(LayoutError::invalid(format!(
            "classification length {} does not match rectangle count {}",
            kinds.len(),
            rects.len()
        )));
    }

    let folder_idx: Vec<usize> = (0..rects.len())
        .filter(|&i| kinds[i] == NodeKind::Folder)
        .collect();
    let file_idx: Vec<usize> = (0..rects.len())
        .filter(|&i| kinds[i] == NodeKind::File)
        .collect();
    if folder_idx.is_empty() || file_idx.is_empty() {
        return Err(LayoutError::invalid(
            "mixed layout needs at least one file and one folder",
        ));
    }

    let folder_dims: Vec<(f64, f64)> = folder_idx
        .iter()
        .map(|&i| (rects[i].width, rects[i].height))
        .collect();
    let file_dims: Vec<(f64, f64)> = file_idx
        .iter()
        .map(|&i| (rects[i].width, rects[i].height))
        .collect();

    for (&i, pos) in folder_idx.iter().zip(grid_positions(&folder_dims, margin)) {
        rects[i].top_left = pos;
    }

    // File block starts at the leftmost folder edge, one margin below the
    // deepest folder bottom.
    let min_left = folder_idx
        .iter()
        .map(|&i| rects[i].left())
        .fold(f64::INFINITY, f64::min);
    let max_bottom = folder_idx
        .iter()
        .map(|&i| rects[i].bottom())
        .fold(f64::NEG_INFINITY, f64::max);
    let block_origin = Point2::new(min_left, max_bottom + margin);

    for (&i, pos) in file_idx.iter().zip(grid_positions(&file_dims, margin)) {
        rects[i].top_left = pos + block_origin;
    }
    Ok(())
}
