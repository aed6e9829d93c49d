use crate::model::{CommitFile, File, Node};

/// Separator between the old and new name of a renamed file.
pub const RENAME_ARROW: &str = " → ";

/// The part of `path` not already shown by ancestor rows.
///
/// Panics if `depth` exceeds the number of path segments; that only happens
/// when compression levels were computed inconsistently.
pub fn name_at_depth(path: &str, depth: usize) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    segments[depth..].join("/")
}

/// Display name of a working tree node, annotated with its previous path
/// when the file was renamed.
///
/// The previous path is shortened the same way as the current one only when
/// the rename stayed inside the same directory; otherwise it is shown in
/// full.
pub fn file_name_at_depth(node: &Node<File>, depth: usize) -> String {
    let segments: Vec<&str> = node.path.split('/').collect();
    let name = segments[depth..].join("/");

    let Some(previous_name) = node.payload().and_then(|file| file.previous_name.as_deref()) else {
        return name;
    };

    let previous_segments: Vec<&str> = previous_name.split('/').collect();
    let same_parent_dir = previous_segments.len() == segments.len()
        && previous_segments[..depth] == segments[..depth];
    let previous_display = if same_parent_dir {
        previous_segments[depth..].join("/")
    } else {
        previous_name.to_string()
    };

    format!("{previous_display}{RENAME_ARROW}{name}")
}

pub fn commit_file_name_at_depth(node: &Node<CommitFile>, depth: usize) -> String {
    name_at_depth(&node.path, depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renamed(path: &str, previous: &str) -> Node<File> {
        Node::file(path, File::new(path, ['R', ' ']).with_previous_name(previous))
    }

    #[test]
    fn should_strip_segments_shown_by_ancestors() {
        let path = "pkg/gui/presentation/files.go";
        assert_eq!(name_at_depth(path, 0), path);
        assert_eq!(name_at_depth(path, 2), "presentation/files.go");
        assert_eq!(name_at_depth(path, 3), "files.go");
    }

    #[test]
    fn should_return_empty_name_at_full_depth() {
        assert_eq!(name_at_depth("a/b", 2), "");
    }

    #[test]
    #[should_panic]
    fn should_panic_when_depth_exceeds_segments() {
        name_at_depth("a/b", 3);
    }

    #[test]
    fn should_shorten_rename_within_same_directory() {
        let node = renamed("dir/new.txt", "dir/old.txt");
        assert_eq!(file_name_at_depth(&node, 1), "old.txt → new.txt");
    }

    #[test]
    fn should_keep_full_previous_path_when_directory_changes() {
        let node = renamed("dirB/new.txt", "dirA/old.txt");
        assert_eq!(file_name_at_depth(&node, 1), "dirA/old.txt → new.txt");
    }

    #[test]
    fn should_keep_full_previous_path_when_depth_differs() {
        let node = renamed("dir/sub/new.txt", "dir/old.txt");
        assert_eq!(file_name_at_depth(&node, 2), "dir/old.txt → new.txt");
    }

    #[test]
    fn should_show_full_paths_for_rename_at_root_depth() {
        let node = renamed("src/new.rs", "src/old.rs");
        assert_eq!(file_name_at_depth(&node, 0), "src/old.rs → src/new.rs");
    }

    #[test]
    fn should_not_annotate_plain_files_or_directories() {
        let file = Node::file("src/main.rs", File::new("src/main.rs", [' ', 'M']));
        assert_eq!(file_name_at_depth(&file, 1), "main.rs");

        let dir: Node<File> = Node::directory("src/ui", vec![]);
        assert_eq!(file_name_at_depth(&dir, 1), "ui");
    }

    #[test]
    fn should_ignore_renames_for_commit_files() {
        let node = Node::file("dir/new.txt", CommitFile::new("dir/new.txt", 'R'));
        assert_eq!(commit_file_name_at_depth(&node, 1), "new.txt");
    }
}
