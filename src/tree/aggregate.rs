use super::arena::FsTree;
use crate::layout::NodeKind;

/// Compute aggregated sizes for all folder nodes (bottom-up).
/// Afterwards each folder's `size` equals the sum of all descendant file sizes.
pub fn aggregate_sizes(tree: &mut FsTree) {
    // Walk the arena in reverse so children (always at higher indices than
    // their parents, by add_child insertion order) are summed before their
    // parents are visited.
    let len = tree.nodes.len();
    for i in (0..len).rev() {
        let node = &tree.nodes[i];
        if node.kind != NodeKind::Folder {
            continue;
        }

        let mut total: u64 = 0;
        let mut child = node.first_child;
        while let Some(child_id) = child {
            total += tree.nodes[child_id.index()].size;
            child = tree.nodes[child_id.index()].next_sibling;
        }
        tree.nodes[i].size = total;
    }
}

#[cfg(test)]
mod tests {
    use super::aggregate_sizes;
    use crate::layout::NodeKind;
    use crate::tree::arena::{FsNode, FsTree};
    use compact_str::CompactString;

    fn node(name: &str, size: u64, kind: NodeKind) -> FsNode {
        FsNode {
            name: CompactString::new(name),
            size,
            kind,
            parent: None,
            first_child: None,
            next_sibling: None,
            depth: 0,
        }
    }

    #[test]
    fn folder_sizes_sum_descendant_files() {
        let mut tree = FsTree::new("root");
        let sub = tree.add_child(tree.root, node("sub", 0, NodeKind::Folder));
        tree.add_child(sub, node("a.txt", 10, NodeKind::File));
        tree.add_child(sub, node("b.txt", 5, NodeKind::File));
        tree.add_child(tree.root, node("c.txt", 7, NodeKind::File));

        aggregate_sizes(&mut tree);

        assert_eq!(tree.get(sub).size, 15);
        assert_eq!(tree.get(tree.root).size, 22);
    }
}
