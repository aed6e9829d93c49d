//! Builds display trees from flat file lists.
//!
//! Directories are created on demand from each file's path, siblings are
//! sorted with directories first, and chains of directories that contain
//! exactly one sub-directory are merged into a single row.

use std::cmp::Ordering;

use super::file::TreeEntry;
use super::node::{Node, NodeKind};

/// Builds a sorted, compressed tree rooted at an empty-path directory.
pub fn build_tree<T: TreeEntry>(files: Vec<T>) -> Node<T> {
    let mut root = Node::root();
    for file in files {
        let path = file.entry_path().to_string();
        let segments: Vec<&str> = path.split('/').collect();
        insert_file(&mut root, &segments, 0, file);
    }

    sort_children(&mut root);
    compress(&mut root);

    tracing::debug!(
        directories = root.directory_paths().len(),
        "built file tree"
    );
    root
}

/// Builds a one-level tree: every file sits directly under the root and is
/// therefore displayed with its full path.
pub fn build_flat_tree<T: TreeEntry>(files: Vec<T>) -> Node<T> {
    let mut children: Vec<Node<T>> = files
        .into_iter()
        .map(|file| Node::file(file.entry_path().to_string(), file))
        .collect();
    children.sort_by(|a, b| a.path.cmp(&b.path));
    Node::directory(String::new(), children)
}

fn insert_file<T>(dir: &mut Node<T>, segments: &[&str], depth: usize, file: T) {
    let NodeKind::Directory(children) = &mut dir.kind else {
        return;
    };

    let path = segments[..=depth].join("/");
    if depth + 1 == segments.len() {
        children.push(Node::file(path, file));
        return;
    }

    let idx = match children
        .iter()
        .position(|child| !child.is_file() && child.path == path)
    {
        Some(idx) => idx,
        None => {
            children.push(Node::directory(path, Vec::new()));
            children.len() - 1
        }
    };
    insert_file(&mut children[idx], segments, depth + 1, file);
}

fn sort_children<T>(node: &mut Node<T>) {
    if let NodeKind::Directory(children) = &mut node.kind {
        children.sort_by(|a, b| match (a.is_file(), b.is_file()) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => a.path.cmp(&b.path),
        });
        children.iter_mut().for_each(sort_children);
    }
}

/// Replaces each directory whose only child is another directory with that
/// child, bumping its compression level. The root itself is never merged.
pub fn compress<T>(node: &mut Node<T>) {
    let NodeKind::Directory(children) = &mut node.kind else {
        return;
    };

    for child in children.iter_mut() {
        loop {
            let next = match &mut child.kind {
                NodeKind::Directory(grandchildren)
                    if grandchildren.len() == 1 && !grandchildren[0].is_file() =>
                {
                    grandchildren.remove(0)
                }
                _ => break,
            };
            let level = child.compression_level + 1;
            *child = next.with_compression(level);
        }
        compress(child);
    }
}
