use super::builder::{build_flat_tree, build_tree};
use super::collapsed::CollapsedPaths;
use super::file::TreeEntry;
use super::node::Node;

/// A file tree together with the set of directories the user has collapsed.
#[derive(Debug, Clone)]
pub struct FileTree<T> {
    root: Option<Node<T>>,
    collapsed: CollapsedPaths,
}

impl<T: TreeEntry> FileTree<T> {
    /// Builds a nested, compressed tree when `tree_view` is set, otherwise a
    /// flat list of full paths.
    pub fn new(files: Vec<T>, tree_view: bool) -> Self {
        let root = if tree_view {
            build_tree(files)
        } else {
            build_flat_tree(files)
        };
        Self::from_root(Some(root))
    }
}

impl<T> FileTree<T> {
    pub fn from_root(root: Option<Node<T>>) -> Self {
        Self {
            root,
            collapsed: CollapsedPaths::new(),
        }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    pub fn collapsed_paths(&self) -> &CollapsedPaths {
        &self.collapsed
    }

    pub fn is_collapsed(&self, path: &str) -> bool {
        self.collapsed.contains(path)
    }

    pub fn collapse(&mut self, path: impl Into<String>) {
        self.collapsed.collapse(path);
    }

    pub fn toggle_collapsed(&mut self, path: &str) -> bool {
        self.collapsed.toggle(path)
    }

    pub fn collapse_all(&mut self) {
        if let Some(root) = &self.root {
            self.collapsed = root.directory_paths().into_iter().collect();
        }
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    pub fn file_count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.files().len())
    }
}
