//! Rendering of file trees into styled list lines.
//!
//! Both entry points flatten the visible part of a tree and format each row
//! independently. Nothing is cached between calls: a refresh rebuilds the
//! tree and renders it again.

pub mod aggregate;
pub mod commit_line;
pub mod escape;
pub mod file_line;
pub mod flatten;
pub mod name;

use ratatui::text::Line;

use crate::model::{CommitFile, File, FileTree, PatchStatusLookup, SubmoduleConfig};
use crate::theme::Theme;

use aggregate::{PatchSummary, change_flags_index, patch_status_index};
use commit_line::commit_file_line;
use file_line::file_line;

pub use flatten::{FlatRow, flatten, visible_rows};

pub const EXPANDED_ARROW: &str = "▼";
pub const COLLAPSED_ARROW: &str = "▶";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Insert a Nerd Font icon before each name
    pub show_icons: bool,
}

pub(crate) fn indentation(visual_depth: usize) -> String {
    "  ".repeat(visual_depth)
}

/// Concatenated text of a line without styling.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Renders the working tree's changed files, one line per visible node.
pub fn render_file_tree(
    tree: &FileTree<File>,
    submodule_configs: &[SubmoduleConfig],
    theme: &Theme,
    options: RenderOptions,
) -> Vec<Line<'static>> {
    let Some(root) = tree.root() else {
        return Vec::new();
    };

    let flags = change_flags_index(root);
    let lines = flatten(Some(root), tree.collapsed_paths(), |row| {
        let row_flags = flags.get(row.node).unwrap_or_default();
        file_line(row, row_flags, submodule_configs, theme, options)
    });

    tracing::debug!(lines = lines.len(), "rendered working tree");
    lines
}

/// Renders a commit's file tree, coloring each node by its inclusion in the
/// custom patch as reported by `lookup` for `reference`.
pub fn render_commit_file_tree(
    tree: &FileTree<CommitFile>,
    reference: &str,
    lookup: &impl PatchStatusLookup,
    theme: &Theme,
    options: RenderOptions,
) -> Vec<Line<'static>> {
    let Some(root) = tree.root() else {
        return Vec::new();
    };

    let statuses = patch_status_index(root, reference, lookup);
    let lines = flatten(Some(root), tree.collapsed_paths(), |row| {
        let status = statuses
            .get(row.node)
            .map(PatchSummary::status)
            .unwrap_or_default();
        commit_file_line(row, status, theme, options)
    });

    tracing::debug!(lines = lines.len(), reference, "rendered commit file tree");
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Node, PatchSelection, PatchStatus};

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    fn working_tree() -> FileTree<File> {
        FileTree::new(
            vec![
                File::new("pkg/gui/presentation/files.go", ['M', ' ']),
                File::new("pkg/gui/app.go", [' ', 'M']),
                File::new("pkg/gui/renamed.go", ['R', ' ']).with_previous_name("pkg/gui/old.go"),
                File::new("README.md", ['?', '?']),
            ],
            true,
        )
    }

    #[test]
    fn should_render_working_tree_with_compressed_directories() {
        let lines = render_file_tree(&working_tree(), &[], &Theme::dark(), RenderOptions::default());

        assert_eq!(
            texts(&lines),
            vec![
                "▼ pkg/gui",
                "  ▼ presentation",
                "    M  files.go",
                "   M app.go",
                "  R  old.go → renamed.go",
                "?? README.md",
            ]
        );
    }

    #[test]
    fn should_color_partially_staged_directory_arrow_only() {
        let theme = Theme::dark();
        let lines = render_file_tree(&working_tree(), &[], &theme, RenderOptions::default());

        // pkg/gui holds staged and unstaged files
        assert_eq!(lines[0].spans[1].style, theme.staged_style());
        assert_eq!(lines[0].spans.last().expect("name").style, theme.text_style());

        // presentation only holds staged files
        assert_eq!(lines[1].spans[1].style, theme.staged_style());
        assert_eq!(lines[1].spans.last().expect("name").style, theme.staged_style());
    }

    #[test]
    fn should_omit_descendants_of_collapsed_directory() {
        let mut tree = working_tree();
        tree.collapse("pkg/gui/presentation");
        let lines = render_file_tree(&tree, &[], &Theme::dark(), RenderOptions::default());

        assert_eq!(
            texts(&lines),
            vec![
                "▼ pkg/gui",
                "  ▶ presentation",
                "   M app.go",
                "  R  old.go → renamed.go",
                "?? README.md",
            ]
        );
    }

    #[test]
    fn should_render_flat_tree_with_full_paths() {
        let tree = FileTree::new(
            vec![
                File::new("src/main.rs", [' ', 'M']),
                File::new("Cargo.toml", ['M', ' ']),
            ],
            false,
        );
        let lines = render_file_tree(&tree, &[], &Theme::dark(), RenderOptions::default());

        assert_eq!(texts(&lines), vec!["M  Cargo.toml", " M src/main.rs"]);
    }

    #[test]
    fn should_render_nothing_for_missing_or_leaf_root() {
        let empty: FileTree<File> = FileTree::from_root(None);
        assert!(render_file_tree(&empty, &[], &Theme::dark(), RenderOptions::default()).is_empty());

        let leaf = FileTree::from_root(Some(Node::file("a.rs", File::new("a.rs", ['A', ' ']))));
        assert!(render_file_tree(&leaf, &[], &Theme::dark(), RenderOptions::default()).is_empty());
    }

    #[test]
    fn should_render_commit_tree_with_aggregated_statuses() {
        let theme = Theme::dark();
        let tree = FileTree::new(
            vec![
                CommitFile::new("src/ui/app.rs", 'M'),
                CommitFile::new("src/ui/help.rs", 'A'),
                CommitFile::new("src/main.rs", 'D'),
                CommitFile::new("docs/guide.md", 'M'),
            ],
            true,
        );
        let mut selection = PatchSelection::new();
        selection.set_status("src/ui/app.rs", "abc123", PatchStatus::Whole);
        selection.set_status("src/ui/help.rs", "abc123", PatchStatus::Whole);

        let lines =
            render_commit_file_tree(&tree, "abc123", &selection, &theme, RenderOptions::default());

        assert_eq!(
            texts(&lines),
            vec![
                "▼ docs",
                "  M guide.md",
                "▼ src",
                "  ▼ ui",
                "    ● app.rs",
                "    ● help.rs",
                "  D main.rs",
            ]
        );
        // docs: unselected, src: part, src/ui: whole
        assert_eq!(lines[0].spans[1].style, theme.text_style());
        assert_eq!(lines[2].spans[1].style, theme.staged_style());
        assert_eq!(lines[2].spans.last().expect("name").style, theme.text_style());
        assert_eq!(lines[3].spans.last().expect("name").style, theme.staged_style());
    }

    #[test]
    fn should_render_file_replaced_by_directory_with_its_own_status() {
        let theme = Theme::dark();
        let tree = FileTree::new(
            vec![CommitFile::new("a", 'D'), CommitFile::new("a/b.rs", 'A')],
            true,
        );
        let mut selection = PatchSelection::new();
        selection.set_status("a/b.rs", "ref", PatchStatus::Whole);

        let lines =
            render_commit_file_tree(&tree, "ref", &selection, &theme, RenderOptions::default());

        assert_eq!(texts(&lines), vec!["▼ a", "  ● b.rs", "D a"]);
        assert_eq!(lines[0].spans.last().expect("name").style, theme.staged_style());
        assert_eq!(lines[2].spans[1].style, theme.change_status_style('D'));
        assert_eq!(lines[2].spans.last().expect("name").style, theme.text_style());
    }

    #[test]
    fn should_look_up_statuses_under_given_reference() {
        let tree = FileTree::new(vec![CommitFile::new("a.rs", 'M')], true);
        let mut selection = PatchSelection::new();
        selection.set_status("a.rs", "other", PatchStatus::Whole);

        let lines =
            render_commit_file_tree(&tree, "abc123", &selection, &Theme::dark(), RenderOptions::default());
        assert_eq!(texts(&lines), vec!["M a.rs"]);
    }

    #[test]
    fn should_keep_names_and_colors_identical_without_icons() {
        let theme = Theme::dark();
        let tree = working_tree();
        let plain = render_file_tree(&tree, &[], &theme, RenderOptions { show_icons: false });
        let iconic = render_file_tree(&tree, &[], &theme, RenderOptions { show_icons: true });

        assert_eq!(plain.len(), iconic.len());
        for (plain_line, icon_line) in plain.iter().zip(&iconic) {
            assert_eq!(icon_line.spans.len(), plain_line.spans.len() + 2);
            let without_icon: Vec<_> = icon_line
                .spans
                .iter()
                .enumerate()
                .filter(|(i, _)| {
                    let icon_at = if plain_line.spans[1].content == EXPANDED_ARROW
                        || plain_line.spans[1].content == COLLAPSED_ARROW
                    {
                        3
                    } else {
                        4
                    };
                    *i != icon_at && *i != icon_at + 1
                })
                .map(|(_, span)| span.clone())
                .collect();
            assert_eq!(without_icon, plain_line.spans);
        }
    }
}
