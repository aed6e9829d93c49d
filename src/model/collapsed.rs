use std::collections::HashSet;

/// Set of directory paths whose contents are hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapsedPaths {
    paths: HashSet<String>,
}

impl CollapsedPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn collapse(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    /// Flips the state of `path`. Returns true if it is now collapsed.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.paths.remove(path) {
            false
        } else {
            self.paths.insert(path.to_string());
            true
        }
    }

    /// Expands every ancestor directory of `path` so the entry becomes visible.
    pub fn expand_to_path(&mut self, path: &str) {
        let segments: Vec<&str> = path.split('/').collect();
        for end in 1..segments.len() {
            self.paths.remove(&segments[..end].join("/"));
        }
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CollapsedPaths {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}
