use std::collections::HashSet;

use git2::{Repository, Status, StatusOptions};

use crate::error::Result;
use crate::model::{File, SubmoduleConfig};

/// Files with changes in the index or working tree, in status order.
pub fn working_tree_files(repo: &Repository) -> Result<Vec<File>> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false)
        .renames_head_to_index(true);

    let statuses = repo.statuses(Some(&mut opts))?;
    let worktrees = linked_worktree_paths(repo);

    let mut files = Vec::new();
    for entry in statuses.iter() {
        let status = entry.status();
        if status.is_empty() || status.is_ignored() {
            continue;
        }

        // For staged renames `path()` is the old name
        let rename = entry
            .head_to_index()
            .filter(|_| status.is_index_renamed())
            .and_then(|delta| {
                let old = delta.old_file().path()?.to_str()?.to_string();
                let new = delta.new_file().path()?.to_str()?.to_string();
                Some((old, new))
            });

        let (name, previous_name) = match rename {
            Some((old, new)) => (new, Some(old)),
            None => match entry.path() {
                Some(path) => (path.trim_end_matches('/').to_string(), None),
                None => {
                    tracing::warn!("skipping status entry with non UTF-8 path");
                    continue;
                }
            },
        };

        let mut file = File::new(name, short_status(status));
        file.previous_name = previous_name;
        file.is_worktree = status.is_wt_new() && worktrees.contains(&file.name);
        files.push(file);
    }

    tracing::debug!(files = files.len(), "loaded working tree status");
    Ok(files)
}

/// Two-column status in the format of `git status --short`.
pub fn short_status(status: Status) -> [char; 2] {
    if status.is_conflicted() {
        return ['U', 'U'];
    }
    if status.is_wt_new() && !status.is_index_new() {
        return ['?', '?'];
    }

    let index = if status.is_index_new() {
        'A'
    } else if status.is_index_modified() {
        'M'
    } else if status.is_index_deleted() {
        'D'
    } else if status.is_index_renamed() {
        'R'
    } else if status.is_index_typechange() {
        'T'
    } else {
        ' '
    };

    let worktree = if status.is_wt_modified() {
        'M'
    } else if status.is_wt_deleted() {
        'D'
    } else if status.is_wt_renamed() {
        'R'
    } else if status.is_wt_typechange() {
        'T'
    } else {
        ' '
    };

    [index, worktree]
}

/// Paths of linked worktrees that live inside this repository's working
/// directory, relative to it.
fn linked_worktree_paths(repo: &Repository) -> HashSet<String> {
    let Some(workdir) = repo.workdir() else {
        return HashSet::new();
    };
    let Ok(names) = repo.worktrees() else {
        return HashSet::new();
    };

    names
        .iter()
        .flatten()
        .filter_map(|name| repo.find_worktree(name).ok())
        .filter_map(|worktree| {
            let relative = worktree.path().strip_prefix(workdir).ok()?;
            let relative = relative.to_str()?.trim_end_matches('/');
            (!relative.is_empty()).then(|| relative.to_string())
        })
        .collect()
}

pub fn submodule_configs(repo: &Repository) -> Result<Vec<SubmoduleConfig>> {
    let configs = repo
        .submodules()?
        .iter()
        .filter_map(|submodule| {
            let path = submodule.path().to_str()?.to_string();
            Some(SubmoduleConfig {
                name: submodule.name().unwrap_or(&path).to_string(),
                path,
                url: submodule.url().map(str::to_string),
            })
        })
        .collect();
    Ok(configs)
}
