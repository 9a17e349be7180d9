pub mod aggregate;
pub mod arena;
pub mod pack;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use compact_str::CompactString;

use self::arena::{FsNode, FsTree, NodeId};
use crate::layout::NodeKind;
use crate::scanner::RawEntry;

/// Build an FsTree from a flat list of scan entries rooted at `root_path`.
///
/// Folders are created first so the path map can resolve every file's parent;
/// intermediate folders missing from the scan (permission holes) are created
/// on demand. Folder sizes are aggregated bottom-up at the end.
pub fn build_tree(root_path: &Path, entries: &[RawEntry]) -> FsTree {
    let root_name = root_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root_path.to_string_lossy().to_string());

    let mut tree = FsTree::new(&root_name);
    if entries.is_empty() {
        return tree;
    }

    let dir_count = entries.iter().filter(|e| e.is_dir).count();
    tracing::info!(
        "Building tree from {} entries ({} folders, {} files)",
        entries.len(),
        dir_count,
        entries.len() - dir_count
    );

    // path → NodeId for parent lookups
    let mut path_map: HashMap<PathBuf, NodeId> = HashMap::new();
    path_map.insert(root_path.to_path_buf(), tree.root);

    // First pass: folder nodes
    for entry in entries.iter().filter(|e| e.is_dir) {
        if entry.path == root_path {
            continue;
        }
        ensure_folder(&mut tree, &mut path_map, root_path, &entry.path);
    }

    // Second pass: file nodes
    for entry in entries.iter().filter(|e| !e.is_dir) {
        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let parent_path = entry.path.parent().unwrap_or(Path::new("")).to_path_buf();
        let parent_id = ensure_folder(&mut tree, &mut path_map, root_path, &parent_path);

        let node = FsNode {
            name: CompactString::new(&name),
            size: entry.size,
            kind: NodeKind::File,
            parent: Some(parent_id),
            first_child: None,
            next_sibling: None,
            depth: 0, // set by add_child
        };

        let id = tree.add_child(parent_id, node);
        path_map.insert(entry.path.clone(), id);
    }

    aggregate::aggregate_sizes(&mut tree);

    tracing::info!(
        "Tree built: {} total nodes, {} direct children of root",
        tree.len(),
        tree.children(tree.root).count()
    );

    tree
}

/// Ensure a folder node exists at `path`, creating missing ancestors between
/// the scan root and the target. Iterative so deep paths cannot blow the stack.
fn ensure_folder(
    tree: &mut FsTree,
    path_map: &mut HashMap<PathBuf, NodeId>,
    root_path: &Path,
    path: &Path,
) -> NodeId {
    // Fast path: already exists
    if let Some(&id) = path_map.get(path) {
        return id;
    }

    // Collect missing ancestors from the target up toward a known node
    let mut missing = Vec::new();
    let mut current = path.to_path_buf();

    loop {
        if path_map.contains_key(&current) {
            break;
        }
        missing.push(current.clone());

        match current.parent() {
            Some(parent) if parent.starts_with(root_path) => {
                current = parent.to_path_buf();
            }
            _ => break,
        }
    }

    // Create from the root downward
    missing.reverse();

    let mut last_id = tree.root;
    for ancestor in missing {
        let parent_path = ancestor.parent().unwrap_or(Path::new("")).to_path_buf();
        let parent_id = path_map.get(&parent_path).copied().unwrap_or(tree.root);

        let name = ancestor
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let node = FsNode {
            name: CompactString::new(&name),
            size: 0,
            kind: NodeKind::Folder,
            parent: Some(parent_id),
            first_child: None,
            next_sibling: None,
            depth: 0,
        };

        let id = tree.add_child(parent_id, node);
        path_map.insert(ancestor.clone(), id);
        last_id = id;
    }

    last_id
}

#[cfg(test)]
mod tests {
    use super::build_tree;
    use crate::layout::NodeKind;
    use crate::scanner::RawEntry;
    use std::path::PathBuf;

    fn entry(path: &str, size: u64, is_dir: bool) -> RawEntry {
        RawEntry {
            path: PathBuf::from(path),
            size,
            is_dir,
        }
    }

    #[test]
    fn builds_nested_structure_with_aggregated_sizes() {
        let root = PathBuf::from("/scan");
        let entries = vec![
            entry("/scan/docs", 0, true),
            entry("/scan/docs/a.txt", 100, false),
            entry("/scan/docs/b.txt", 50, false),
            entry("/scan/readme.md", 10, false),
        ];

        let tree = build_tree(&root, &entries);
        assert_eq!(tree.len(), 5); // root + docs + 3 files
        assert_eq!(tree.get(tree.root).size, 160);

        let docs = tree
            .children(tree.root)
            .find(|&id| tree.get(id).name == "docs")
            .unwrap();
        assert_eq!(tree.get(docs).kind, NodeKind::Folder);
        assert_eq!(tree.get(docs).size, 150);
        assert_eq!(tree.children(docs).count(), 2);
    }

    #[test]
    fn missing_intermediate_folders_are_created() {
        let root = PathBuf::from("/scan");
        // deep file with no folder entries at all
        let entries = vec![entry("/scan/a/b/c.txt", 1, false)];

        let tree = build_tree(&root, &entries);
        assert_eq!(tree.len(), 4); // root, a, b, c.txt
        assert_eq!(tree.get(tree.root).size, 1);
    }
}
