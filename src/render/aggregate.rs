//! Per-directory summaries folded up from file payloads.
//!
//! A directory's value is the combination of its children's values, so the
//! whole tree is summarised in one post-order pass instead of rescanning the
//! leaves below every row.

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::model::{CommitFile, File, Node, NodeKind, PatchStatus, PatchStatusLookup};

/// Values computed for every node of a tree, keyed by node identity.
///
/// Paths are not used as keys: a file replaced by a directory of the same
/// name (`a` deleted, `a/b.rs` added) yields two sibling nodes with one path.
#[derive(Debug, Clone)]
pub struct SubtreeIndex<'a, T, A> {
    values: HashMap<*const Node<T>, A>,
    _tree: PhantomData<&'a Node<T>>,
}

impl<'a, T, A: Copy> SubtreeIndex<'a, T, A> {
    /// Folds `root` bottom-up. Files map through `leaf`; directories combine
    /// their children's values with `combine`, starting from `empty`.
    pub fn build(
        root: &'a Node<T>,
        empty: A,
        mut leaf: impl FnMut(&T) -> A,
        mut combine: impl FnMut(A, A) -> A,
    ) -> Self {
        let mut values: HashMap<*const Node<T>, A> = HashMap::new();
        let mut stack: Vec<(&Node<T>, bool)> = vec![(root, false)];

        while let Some((node, children_done)) = stack.pop() {
            match &node.kind {
                NodeKind::File(payload) => {
                    values.insert(node, leaf(payload));
                }
                NodeKind::Directory(children) if children_done => {
                    let value = children
                        .iter()
                        .filter_map(|child| values.get(&(child as *const Node<T>)).copied())
                        .fold(empty, &mut combine);
                    values.insert(node, value);
                }
                NodeKind::Directory(children) => {
                    stack.push((node, true));
                    stack.extend(children.iter().map(|child| (child, false)));
                }
            }
        }

        Self {
            values,
            _tree: PhantomData,
        }
    }

    /// Value of `node`, which must belong to the indexed tree.
    pub fn get(&self, node: &Node<T>) -> Option<A> {
        self.values.get(&(node as *const Node<T>)).copied()
    }
}

/// Whether every file below a node is fully included, and whether every file
/// is excluded. Both hold for a subtree without files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSummary {
    pub all_whole: bool,
    pub all_unselected: bool,
}

impl PatchSummary {
    pub const EMPTY: Self = Self {
        all_whole: true,
        all_unselected: true,
    };

    pub fn of(status: PatchStatus) -> Self {
        Self {
            all_whole: status == PatchStatus::Whole,
            all_unselected: status == PatchStatus::Unselected,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            all_whole: self.all_whole && other.all_whole,
            all_unselected: self.all_unselected && other.all_unselected,
        }
    }

    pub fn status(self) -> PatchStatus {
        if self.all_whole {
            PatchStatus::Whole
        } else if self.all_unselected {
            PatchStatus::Unselected
        } else {
            PatchStatus::Part
        }
    }
}

/// Patch status of every node in a commit file tree.
pub fn patch_status_index<'a>(
    root: &'a Node<CommitFile>,
    reference: &str,
    lookup: &impl PatchStatusLookup,
) -> SubtreeIndex<'a, CommitFile, PatchSummary> {
    SubtreeIndex::build(
        root,
        PatchSummary::EMPTY,
        |file| PatchSummary::of(lookup.file_status(&file.name, reference)),
        PatchSummary::merge,
    )
}

/// Staged/unstaged flags of a working tree node: a directory has staged
/// changes when any file below it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeFlags {
    pub has_staged_changes: bool,
    pub has_unstaged_changes: bool,
}

impl ChangeFlags {
    pub fn of(file: &File) -> Self {
        Self {
            has_staged_changes: file.has_staged_changes,
            has_unstaged_changes: file.has_unstaged_changes,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            has_staged_changes: self.has_staged_changes || other.has_staged_changes,
            has_unstaged_changes: self.has_unstaged_changes || other.has_unstaged_changes,
        }
    }

    pub fn is_fully_staged(self) -> bool {
        self.has_staged_changes && !self.has_unstaged_changes
    }
}

pub fn change_flags_index(root: &Node<File>) -> SubtreeIndex<'_, File, ChangeFlags> {
    SubtreeIndex::build(root, ChangeFlags::default(), ChangeFlags::of, ChangeFlags::merge)
}
