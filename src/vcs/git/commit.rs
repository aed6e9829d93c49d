use git2::{Delta, DiffFindOptions, Repository};

use crate::error::{Result, TreelineError};
use crate::model::CommitFile;
use crate::vcs::CommitChanges;

/// Files changed by the commit `revision` resolves to, compared against its
/// first parent. Root commits are compared against the empty tree.
pub fn commit_changes(repo: &Repository, revision: &str) -> Result<CommitChanges> {
    let commit = repo
        .revparse_single(revision)
        .and_then(|object| object.peel_to_commit())
        .map_err(|_| TreelineError::InvalidRevision(revision.to_string()))?;

    let new_tree = commit.tree()?;
    let old_tree = if commit.parent_count() > 0 {
        Some(commit.parent(0)?.tree()?)
    } else {
        None
    };

    let mut diff = repo.diff_tree_to_tree(old_tree.as_ref(), Some(&new_tree), None)?;
    let mut find_opts = DiffFindOptions::new();
    find_opts.renames(true);
    diff.find_similar(Some(&mut find_opts))?;

    let files: Vec<CommitFile> = diff
        .deltas()
        .filter_map(|delta| {
            let path = delta.new_file().path().or_else(|| delta.old_file().path())?;
            let name = path.to_str()?.to_string();
            Some(CommitFile::new(name, change_status(delta.status())))
        })
        .collect();

    let id = commit.id().to_string();
    let short_id = id[..7.min(id.len())].to_string();
    let summary = commit.summary().unwrap_or("(no message)").to_string();

    tracing::debug!(commit = %short_id, files = files.len(), "loaded commit files");

    Ok(CommitChanges {
        commit_id: id,
        short_id,
        summary,
        files,
    })
}

/// Single-letter change status as printed by `git diff --name-status`.
pub fn change_status(delta: Delta) -> char {
    match delta {
        Delta::Added => 'A',
        Delta::Deleted => 'D',
        Delta::Modified => 'M',
        Delta::Renamed => 'R',
        Delta::Copied => 'C',
        Delta::Typechange => 'T',
        Delta::Untracked => '?',
        Delta::Conflicted => 'U',
        _ => 'X',
    }
}
