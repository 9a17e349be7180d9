use compact_str::CompactString;

use crate::layout::NodeKind;

/// Index into the arena `Vec<FsNode>`. u32 keeps the node small while still
/// supporting ~4 billion entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A file or folder in the tree, stored in a flat arena with sibling-list
/// links: each node knows its `first_child` and `next_sibling`.
#[derive(Debug, Clone)]
pub struct FsNode {
    /// File or folder name (not the full path)
    pub name: CompactString,
    /// Size in bytes. Files: actual size. Folders: aggregated sum of children.
    pub size: u64,
    /// Explicit classification, consumed by the layout strategy selector
    pub kind: NodeKind,
    /// Parent node index (None for root)
    pub parent: Option<NodeId>,
    /// First child node index (None for files / empty folders)
    pub first_child: Option<NodeId>,
    /// Next sibling node index (None if last child)
    pub next_sibling: Option<NodeId>,
    /// Depth in the tree (root = 0)
    pub depth: u16,
}

/// The filesystem tree stored as a flat arena of nodes.
pub struct FsTree {
    /// All nodes in contiguous memory. `add_child` appends, so a child always
    /// has a higher index than its parent.
    pub nodes: Vec<FsNode>,
    /// Root node index
    pub root: NodeId,
}

impl FsTree {
    /// Create a tree holding only a root folder.
    pub fn new(root_name: &str) -> Self {
        let root_node = FsNode {
            name: CompactString::new(root_name),
            size: 0,
            kind: NodeKind::Folder,
            parent: None,
            first_child: None,
            next_sibling: None,
            depth: 0,
        };

        FsTree {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    /// Add a child node under the given parent. Returns the new node's ID.
    pub fn add_child(&mut self, parent: NodeId, mut node: FsNode) -> NodeId {
        let new_id = NodeId(self.nodes.len() as u32);
        node.parent = Some(parent);
        node.depth = self.nodes[parent.index()].depth + 1;

        // Prepend to the parent's child list (O(1))
        node.next_sibling = self.nodes[parent.index()].first_child;
        self.nodes[parent.index()].first_child = Some(new_id);

        self.nodes.push(node);
        new_id
    }

    pub fn get(&self, id: NodeId) -> &FsNode {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut FsNode {
        &mut self.nodes[id.index()]
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds anything beyond the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over the children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        ChildIter {
            tree: self,
            current: self.nodes[parent.index()].first_child,
        }
    }
}

/// Iterator over the children of a node.
pub struct ChildIter<'a> {
    tree: &'a FsTree,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.nodes[id.index()].next_sibling;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{FsNode, FsTree};
    use crate::layout::NodeKind;
    use compact_str::CompactString;

    fn file(name: &str, size: u64) -> FsNode {
        FsNode {
            name: CompactString::new(name),
            size,
            kind: NodeKind::File,
            parent: None,
            first_child: None,
            next_sibling: None,
            depth: 0,
        }
    }

    #[test]
    fn children_iterate_in_reverse_insertion_order() {
        let mut tree = FsTree::new("root");
        let a = tree.add_child(tree.root, file("a", 1));
        let b = tree.add_child(tree.root, file("b", 2));

        let children: Vec<_> = tree.children(tree.root).collect();
        assert_eq!(children, vec![b, a]);
        assert_eq!(tree.get(a).depth, 1);
        assert_eq!(tree.get(a).parent, Some(tree.root));
    }

    #[test]
    fn fresh_tree_is_empty() {
        let tree = FsTree::new("root");
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 1);
    }
}
