use std::path::PathBuf;

use crate::error::Result;
use crate::model::{CommitFile, File, SubmoduleConfig};

/// Repository information
#[derive(Debug, Clone)]
pub struct VcsInfo {
    pub root_path: PathBuf,
    /// Checked-out branch, `None` on a detached HEAD
    pub branch_name: Option<String>,
}

/// Files changed by a single commit, relative to its first parent.
#[derive(Debug, Clone)]
pub struct CommitChanges {
    /// Full commit id; patch selections are keyed by it
    pub commit_id: String,
    pub short_id: String,
    pub summary: String,
    pub files: Vec<CommitFile>,
}

/// Source of the file lists that get rendered as trees
pub trait VcsBackend: Send {
    fn info(&self) -> &VcsInfo;

    /// Files with staged, unstaged or untracked changes.
    fn working_tree_files(&self) -> Result<Vec<File>>;

    /// Submodules declared by the repository. Empty if not supported.
    fn submodule_configs(&self) -> Result<Vec<SubmoduleConfig>> {
        Ok(Vec::new())
    }

    /// Files changed by the commit that `revision` resolves to.
    fn commit_changes(&self, revision: &str) -> Result<CommitChanges>;
}
