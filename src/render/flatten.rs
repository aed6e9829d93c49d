//! Turns a file tree into the ordered list of rows that are visible.
//!
//! Two depths are tracked per row. The tree depth counts raw path segments
//! and decides how much of a path is already shown by ancestor rows; the
//! visual depth counts rows and decides indentation. They differ whenever an
//! ancestor is a compressed directory chain.

use crate::model::{CollapsedPaths, Node, NodeKind};

/// One visible row of a flattened tree.
#[derive(Debug)]
pub struct FlatRow<'a, T> {
    pub node: &'a Node<T>,
    pub tree_depth: usize,
    pub visual_depth: usize,
    pub collapsed: bool,
}

impl<T> Clone for FlatRow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FlatRow<'_, T> {}

/// Lists the visible rows of `root` in pre-order.
///
/// The root itself never produces a row, so a tree whose root is a file is
/// empty. Collapsed directories produce their own row but none for their
/// descendants.
pub fn visible_rows<'a, T>(
    root: Option<&'a Node<T>>,
    collapsed: &CollapsedPaths,
) -> Vec<FlatRow<'a, T>> {
    let _span = tracing::trace_span!("visible_rows").entered();

    let Some(root) = root else {
        return Vec::new();
    };
    let NodeKind::Directory(children) = &root.kind else {
        return Vec::new();
    };
    if collapsed.contains(&root.path) {
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut stack: Vec<(&Node<T>, usize, usize)> = children
        .iter()
        .rev()
        .map(|child| (child, root.compression_level, 0))
        .collect();

    while let Some((node, tree_depth, visual_depth)) = stack.pop() {
        match &node.kind {
            NodeKind::File(_) => rows.push(FlatRow {
                node,
                tree_depth,
                visual_depth,
                collapsed: false,
            }),
            NodeKind::Directory(children) => {
                let is_collapsed = collapsed.contains(&node.path);
                rows.push(FlatRow {
                    node,
                    tree_depth,
                    visual_depth,
                    collapsed: is_collapsed,
                });
                if is_collapsed {
                    continue;
                }

                let child_tree_depth = tree_depth + 1 + node.compression_level;
                stack.extend(
                    children
                        .iter()
                        .rev()
                        .map(|child| (child, child_tree_depth, visual_depth + 1)),
                );
            }
        }
    }

    tracing::trace!(rows = rows.len(), "flattened tree");
    rows
}

/// Renders every visible row of `root` with `render_line`, in display order.
pub fn flatten<'a, T, L>(
    root: Option<&'a Node<T>>,
    collapsed: &CollapsedPaths,
    render_line: impl FnMut(FlatRow<'a, T>) -> L,
) -> Vec<L> {
    visible_rows(root, collapsed)
        .into_iter()
        .map(render_line)
        .collect()
}
