mod commit;
mod status;

use git2::Repository;
use std::path::Path;

use crate::error::{Result, TreelineError};
use crate::model::{File, SubmoduleConfig};

use super::traits::{CommitChanges, VcsBackend, VcsInfo};

pub use commit::{change_status, commit_changes};
pub use status::{short_status, submodule_configs, working_tree_files};

/// Git backend implementation using git2 library
pub struct GitBackend {
    repo: Repository,
    info: VcsInfo,
}

impl GitBackend {
    /// Discover the git repository containing `path`
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| TreelineError::NotARepository)?;
        Self::from_repository(repo)
    }

    pub fn from_repository(repo: Repository) -> Result<Self> {
        let root_path = repo
            .workdir()
            .ok_or(TreelineError::NotARepository)?
            .to_path_buf();

        let branch_name = repo.head().ok().and_then(|h| {
            if h.is_branch() {
                h.shorthand().map(|s| s.to_string())
            } else {
                None
            }
        });

        tracing::debug!(root = %root_path.display(), branch = ?branch_name, "opened git repository");

        let info = VcsInfo {
            root_path,
            branch_name,
        };

        Ok(Self { repo, info })
    }
}

impl VcsBackend for GitBackend {
    fn info(&self) -> &VcsInfo {
        &self.info
    }

    fn working_tree_files(&self) -> Result<Vec<File>> {
        working_tree_files(&self.repo)
    }

    fn submodule_configs(&self) -> Result<Vec<SubmoduleConfig>> {
        submodule_configs(&self.repo)
    }

    fn commit_changes(&self, revision: &str) -> Result<CommitChanges> {
        commit_changes(&self.repo, revision)
    }
}
