/// What a node holds: ordered children for a directory, a payload for a file.
///
/// Keeping the two cases in one enum means a node can never be both a file
/// and a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind<T> {
    Directory(Vec<Node<T>>),
    File(T),
}

/// One entry in a file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// Full `/`-separated path. The root's path is empty. A file and a
    /// directory may share a path when one replaced the other.
    pub path: String,
    pub kind: NodeKind<T>,
    /// Number of extra path segments merged into this node's row, e.g. a
    /// directory shown as `pkg/gui` absorbs one segment and has level 1.
    pub compression_level: usize,
}

impl<T> Node<T> {
    pub fn file(path: impl Into<String>, payload: T) -> Self {
        Self {
            path: path.into(),
            kind: NodeKind::File(payload),
            compression_level: 0,
        }
    }

    pub fn directory(path: impl Into<String>, children: Vec<Node<T>>) -> Self {
        Self {
            path: path.into(),
            kind: NodeKind::Directory(children),
            compression_level: 0,
        }
    }

    /// An empty directory with an empty path, used as the tree root.
    pub fn root() -> Self {
        Self::directory(String::new(), Vec::new())
    }

    pub fn with_compression(mut self, level: usize) -> Self {
        self.compression_level = level;
        self
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File(_))
    }

    /// The file payload, or `None` for a directory.
    pub fn payload(&self) -> Option<&T> {
        match &self.kind {
            NodeKind::File(payload) => Some(payload),
            NodeKind::Directory(_) => None,
        }
    }

    /// Children in display order. Files have none.
    pub fn children(&self) -> &[Node<T>] {
        match &self.kind {
            NodeKind::Directory(children) => children,
            NodeKind::File(_) => &[],
        }
    }

    /// Walks every file payload below (or at) this node, depth first.
    pub fn files(&self) -> Vec<&T> {
        let mut files = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match &node.kind {
                NodeKind::File(payload) => files.push(payload),
                NodeKind::Directory(children) => stack.extend(children.iter().rev()),
            }
        }
        files
    }

    /// True when `predicate` holds for every file in this subtree.
    /// Vacuously true for a subtree without files.
    pub fn every_file(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.files().into_iter().all(|file| predicate(file))
    }

    /// True when `predicate` holds for at least one file in this subtree.
    pub fn any_file(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.files().into_iter().any(|file| predicate(file))
    }

    /// Paths of every directory strictly below this node.
    pub fn directory_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        let mut stack: Vec<&Node<T>> = self.children().iter().collect();
        while let Some(node) = stack.pop() {
            if let NodeKind::Directory(children) = &node.kind {
                paths.push(node.path.clone());
                stack.extend(children.iter());
            }
        }
        paths
    }
}
