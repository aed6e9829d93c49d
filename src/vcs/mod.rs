//! Loading of changed files from version control.
//!
//! Only Git is supported; the backend trait keeps the rendering side
//! independent of git2.

pub mod git;
mod traits;

pub use git::GitBackend;
pub use traits::{CommitChanges, VcsBackend, VcsInfo};

use std::path::Path;

use crate::error::Result;

/// Open the repository containing `path`.
pub fn detect_vcs(path: &Path) -> Result<Box<dyn VcsBackend>> {
    let backend = GitBackend::discover(path)?;
    Ok(Box::new(backend))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreelineError;
    use tempfile::tempdir;

    #[test]
    fn should_fail_outside_a_repository() {
        let dir = tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("not-a-repo");
        std::fs::create_dir(&nested).expect("failed to create dir");

        // The temp dir could itself live inside a repository on some machines
        match detect_vcs(&nested) {
            Err(err) => assert!(matches!(err, TreelineError::NotARepository)),
            Ok(backend) => assert!(!backend.info().root_path.starts_with(&nested)),
        }
    }
}
