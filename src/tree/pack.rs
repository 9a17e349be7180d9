use std::collections::HashMap;

use rayon::prelude::*;

use super::arena::{FsTree, NodeId};
use crate::geometry::{bounding, Point2, Rect};
use crate::layout::{select_strategy, LayoutError, NodeKind};

/// File cards are a fixed height; width stretches with the name so labels fit.
pub const FILE_HEIGHT: f64 = 100.0;
const FILE_CHAR_WIDTH: f64 = 16.0;
const FILE_MIN_WIDTH: f64 = 64.0;

/// Configuration for packing a tree into nested rectangles.
#[derive(Clone)]
pub struct PackConfig {
    /// Minimum empty space between any two sibling rectangles, and between a
    /// folder's border and its content
    pub margin: f64,
}

impl Default for PackConfig {
    fn default() -> Self {
        PackConfig { margin: 8.0 }
    }
}

/// A node's final rectangle in world coordinates (root folder at the origin).
#[derive(Debug, Clone, Copy)]
pub struct PlacedRect {
    pub node: NodeId,
    pub rect: Rect,
    pub depth: u16,
    pub kind: NodeKind,
}

/// The full packing result (rects in paint order + fast lookup).
#[derive(Debug)]
pub struct Layout {
    /// All rectangles, parents before children (DFS preorder paint order)
    pub rects: Vec<PlacedRect>,
    /// node → index into `rects` (O(1) hover / highlighting)
    pub node_to_rect: HashMap<NodeId, usize>,
}

/// Pack the whole tree bottom-up: every folder packs its children with the
/// strategy selected from their composition, then wraps them with a margin on
/// all sides.
///
/// Nodes are processed level by level from the deepest up, each level in
/// parallel — sibling subtrees share no rectangles, so the only join point is
/// the level boundary. Iterating over levels instead of recursing keeps a
/// pathologically deep folder chain from exhausting the stack.
pub fn pack_tree(tree: &FsTree, config: &PackConfig) -> Result<Layout, LayoutError> {
    // Bucket node indices by depth. A child is always exactly one level below
    // its parent, so once level d+1 is packed, every node at level d is ready.
    let mut levels: Vec<Vec<u32>> = Vec::new();
    for (index, node) in tree.nodes.iter().enumerate() {
        let depth = node.depth as usize;
        if levels.len() <= depth {
            levels.resize_with(depth + 1, Vec::new);
        }
        levels[depth].push(index as u32);
    }

    let mut packed: Vec<Option<Subtree>> = Vec::new();
    packed.resize_with(tree.len(), || None);

    for level in levels.iter().rev() {
        let results: Vec<(u32, Subtree)> = level
            .par_iter()
            .map(|&index| pack_node(tree, NodeId(index), &packed, config).map(|s| (index, s)))
            .collect::<Result<_, _>>()?;

        for (index, subtree) in results {
            // the parent copied its children's rects; free their slots
            for child in tree.children(NodeId(index)) {
                packed[child.index()] = None;
            }
            packed[index as usize] = Some(subtree);
        }
    }

    let root_subtree = packed[tree.root.index()]
        .take()
        .ok_or_else(|| LayoutError::invalid("root node was never packed"))?;

    let mut rects = Vec::with_capacity(root_subtree.nodes.len());
    let mut node_to_rect = HashMap::with_capacity(root_subtree.nodes.len());
    for (node, rect) in root_subtree.nodes {
        let info = tree.get(node);
        node_to_rect.insert(node, rects.len());
        rects.push(PlacedRect {
            node,
            rect,
            depth: info.depth,
            kind: info.kind,
        });
    }

    tracing::info!(
        "Packed {} rectangles, root bounds {:.0}x{:.0}",
        rects.len(),
        rects[0].rect.width,
        rects[0].rect.height
    );

    Ok(Layout {
        rects,
        node_to_rect,
    })
}

/// One packed subtree: its outer dimensions plus every contained node's
/// rectangle, positioned relative to the subtree's own top-left corner.
struct Subtree {
    width: f64,
    height: f64,
    nodes: Vec<(NodeId, Rect)>,
}

/// Pack a single node, reading its (already packed) children from `packed`.
fn pack_node(
    tree: &FsTree,
    id: NodeId,
    packed: &[Option<Subtree>],
    config: &PackConfig,
) -> Result<Subtree, LayoutError> {
    let node = tree.get(id);
    if node.kind == NodeKind::File {
        return Ok(leaf_subtree(tree, id));
    }

    let children: Vec<NodeId> = tree.children(id).collect();
    if children.is_empty() {
        // empty folders keep a file-sized placeholder footprint
        return Ok(leaf_subtree(tree, id));
    }

    let subtrees: Vec<&Subtree> = children
        .iter()
        .map(|c| {
            packed[c.index()]
                .as_ref()
                .ok_or_else(|| LayoutError::invalid("child node packed after its parent"))
        })
        .collect::<Result<_, _>>()?;

    let mut child_rects: Vec<Rect> = subtrees
        .iter()
        .map(|s| Rect::sized(s.width, s.height))
        .collect();
    let kinds: Vec<NodeKind> = children.iter().map(|&c| tree.get(c).kind).collect();

    let strategy = select_strategy(&kinds);
    tracing::debug!(
        "Packing {} children of '{}' with {:?}",
        children.len(),
        node.name,
        strategy
    );
    strategy.apply(&mut child_rects, &kinds, config.margin)?;

    let content = bounding(&child_rects)
        .ok_or_else(|| LayoutError::invalid("folder packed to an empty bounding box"))?;

    // Re-anchor the content so it starts one margin inside the folder border.
    let shift = Point2::new(
        config.margin - content.left(),
        config.margin - content.top(),
    );
    let width = content.width + 2.0 * config.margin;
    let height = content.height + 2.0 * config.margin;

    let mut nodes = vec![(id, Rect::sized(width, height))];
    for (subtree, child_rect) in subtrees.iter().zip(&child_rects) {
        let origin = child_rect.top_left + shift;
        for &(node_id, rect) in &subtree.nodes {
            let mut rect = rect;
            rect.translate(origin);
            nodes.push((node_id, rect));
        }
    }

    Ok(Subtree {
        width,
        height,
        nodes,
    })
}

fn leaf_subtree(tree: &FsTree, id: NodeId) -> Subtree {
    let name_len = tree.get(id).name.chars().count();
    let width = FILE_MIN_WIDTH.max(name_len as f64 * FILE_CHAR_WIDTH);
    Subtree {
        width,
        height: FILE_HEIGHT,
        nodes: vec![(id, Rect::sized(width, FILE_HEIGHT))],
    }
}
