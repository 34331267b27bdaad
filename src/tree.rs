//! Internal module for assembling scan results into a nested tree.

use crate::types::ScanResult;
use std::collections::BTreeMap;
use std::path::Path;

/// A directory's children, keyed by name. `BTreeMap` keeps iteration
/// lexicographic, which is what both renderers rely on.
#[derive(Debug, Default)]
pub(crate) struct DirNode {
    pub children: BTreeMap<String, TreeNode>,
}

/// One entry in the tree. Files are a distinct variant rather than a
/// sentinel so renderers can pattern-match on what they are printing.
#[derive(Debug)]
pub(crate) enum TreeNode {
    Dir(DirNode),
    File,
}

/// Builds the full directory-plus-file tree for a scan.
pub(crate) fn build_tree(scan: &ScanResult) -> DirNode {
    let mut root = DirNode::default();
    for dir in &scan.dirs {
        ensure_dir(&mut root, dir);
    }
    for file in &scan.files {
        let parent = file.rel.parent().unwrap_or(Path::new(""));
        let node = ensure_dir(&mut root, parent);
        if let Some(name) = file.rel.file_name() {
            node.children
                .insert(name.to_string_lossy().into_owned(), TreeNode::File);
        }
    }
    root
}

/// Builds a tree containing only the scan's directories; the Markdown
/// renderer attaches files separately, grouped by parent path.
pub(crate) fn build_dir_tree(scan: &ScanResult) -> DirNode {
    let mut root = DirNode::default();
    for dir in &scan.dirs {
        ensure_dir(&mut root, dir);
    }
    root
}

fn ensure_dir<'a>(node: &'a mut DirNode, rel: &Path) -> &'a mut DirNode {
    let mut cur = node;
    for comp in rel.components() {
        let name = comp.as_os_str().to_string_lossy().into_owned();
        let entry = cur
            .children
            .entry(name)
            .or_insert_with(|| TreeNode::Dir(DirNode::default()));
        if !matches!(entry, TreeNode::Dir(_)) {
            *entry = TreeNode::Dir(DirNode::default());
        }
        let TreeNode::Dir(next) = entry else {
            unreachable!()
        };
        cur = next;
    }
    cur
}
