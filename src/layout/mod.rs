pub mod collision;
pub mod error;
pub mod greedy;
pub mod grid;
pub mod mixed;
pub mod right_bottom;
pub mod stack;
pub mod strip;

pub use collision::overlaps;
pub use error::LayoutError;
pub use greedy::pack_greedy;
pub use grid::pack_grid;
pub use mixed::{classify_by_height, pack_mixed, FOLDER_HEIGHT_THRESHOLD};
pub use right_bottom::pack_right_bottom;
pub use stack::pack_vertical;
pub use strip::pack_strip;

use crate::geometry::Rect;

/// Explicit classification of a layout item. Passed alongside the rectangles
/// so strategies never have to infer "file or folder" from geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

/// Largest all-folder group handed to the O(n³) greedy search.
const GREEDY_LIMIT: usize = 32;
/// Largest all-folder group handed to the O(n²) right-bottom packer; anything
/// bigger falls through to the linear strip.
const RIGHT_BOTTOM_LIMIT: usize = 256;

/// The available packing strategies. Each maps an ordered rectangle slice plus
/// a margin to new positions; none reorders, resizes, or drops an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    VerticalStack,
    FastStrip,
    GreedyIncremental,
    UniformGrid,
    MixedFilesAndFolders,
    RightBottomGreedy,
}

impl Strategy {
    /// Run this strategy. `kinds` runs parallel to `rects` and is only
    /// consulted by [`Strategy::MixedFilesAndFolders`].
    pub fn apply(
        self,
        rects: &mut [Rect],
        kinds: &[NodeKind],
        margin: f64,
    ) -> Result<(), LayoutError> {
        match self {
            Strategy::VerticalStack => pack_vertical(rects, margin),
            Strategy::FastStrip => pack_strip(rects, margin),
            Strategy::GreedyIncremental => pack_greedy(rects, margin),
            Strategy::UniformGrid => pack_grid(rects, margin),
            Strategy::MixedFilesAndFolders => pack_mixed(rects, kinds, margin),
            Strategy::RightBottomGreedy => pack_right_bottom(rects, margin),
        }
    }
}

/// Pick a strategy from the composition of a folder's children.
///
/// Homogeneous file batches grid well; mixed content gets the two-zone layout;
/// all-folder groups get the most area-efficient search their size can afford.
pub fn select_strategy(kinds: &[NodeKind]) -> Strategy {
    let files = kinds.iter().filter(|&&k| k == NodeKind::File).count();
    let folders = kinds.len() - files;

    if kinds.len() <= 1 {
        Strategy::VerticalStack
    } else if folders == 0 {
        Strategy::UniformGrid
    } else if files > 0 {
        Strategy::MixedFilesAndFolders
    } else if kinds.len() <= GREEDY_LIMIT {
        Strategy::GreedyIncremental
    } else if kinds.len() <= RIGHT_BOTTOM_LIMIT {
        Strategy::RightBottomGreedy
    } else {
        Strategy::FastStrip
    }
}

/// Shared input validation: margin must be finite and non-negative.
/// Runs before any rectangle is touched.
pub(crate) fn check_margin(margin: f64) -> Result<(), LayoutError> {
    if !margin.is_finite() || margin < 0.0 {
        return Err(LayoutError::invalid(format!(
            "margin must be finite and >= 0, got {margin}"
        )));
    }
    Ok(())
}
