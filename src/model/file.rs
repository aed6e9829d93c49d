/// Anything that can be placed in a file tree by its repository-relative path.
pub trait TreeEntry {
    fn entry_path(&self) -> &str;
}

/// A file with changes in the working tree or index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    /// Path before a rename, if the file was renamed.
    pub previous_name: Option<String>,
    /// Two-column short status as printed by `git status --short`, e.g. `['M', ' ']`.
    pub short_status: [char; 2],
    pub has_staged_changes: bool,
    pub has_unstaged_changes: bool,
    /// Set for untracked directories that are linked worktrees of this repository.
    pub is_worktree: bool,
}

impl File {
    /// Builds a file from its short status, deriving the staged/unstaged flags.
    pub fn new(name: impl Into<String>, short_status: [char; 2]) -> Self {
        let [index, worktree] = short_status;
        Self {
            name: name.into(),
            previous_name: None,
            short_status,
            has_staged_changes: !matches!(index, ' ' | '?' | 'U'),
            has_unstaged_changes: worktree != ' ',
            is_worktree: false,
        }
    }

    pub fn with_previous_name(mut self, previous_name: impl Into<String>) -> Self {
        self.previous_name = Some(previous_name.into());
        self
    }

    pub fn is_submodule(&self, configs: &[SubmoduleConfig]) -> bool {
        configs.iter().any(|config| config.path == self.name)
    }
}

impl TreeEntry for File {
    fn entry_path(&self) -> &str {
        &self.name
    }
}

/// A file touched by a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFile {
    pub name: String,
    /// Single-letter change status: A, M, D, R, C, T, ...
    pub change_status: char,
}

impl CommitFile {
    pub fn new(name: impl Into<String>, change_status: char) -> Self {
        Self {
            name: name.into(),
            change_status,
        }
    }
}

impl TreeEntry for CommitFile {
    fn entry_path(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmoduleConfig {
    pub name: String,
    pub path: String,
    pub url: Option<String>,
}
