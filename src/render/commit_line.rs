use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::escape::escape_special_chars;
use super::flatten::FlatRow;
use super::name::commit_file_name_at_depth;
use super::{COLLAPSED_ARROW, EXPANDED_ARROW, RenderOptions, indentation};
use crate::icons::icon_for_file;
use crate::model::{CommitFile, PatchStatus};
use crate::theme::Theme;

pub const WHOLE_SYMBOL: &str = "●";
pub const PART_SYMBOL: &str = "◐";

/// Renders one row of a commit's file tree, colored by how much of it is
/// included in the custom patch.
pub fn commit_file_line(
    row: FlatRow<'_, CommitFile>,
    status: PatchStatus,
    theme: &Theme,
    options: RenderOptions,
) -> Line<'static> {
    let name = escape_special_chars(&commit_file_name_at_depth(row.node, row.tree_depth)).into_owned();
    let commit_file = row.node.payload();
    let is_directory = commit_file.is_none();

    let mut spans = vec![Span::raw(indentation(row.visual_depth))];

    let (symbol, symbol_style, name_style) = match commit_file {
        None => {
            let arrow = if row.collapsed {
                COLLAPSED_ARROW
            } else {
                EXPANDED_ARROW
            };
            let (arrow_style, name_style) = match status {
                PatchStatus::Whole => (theme.staged_style(), theme.staged_style()),
                PatchStatus::Part => (theme.staged_style(), theme.text_style()),
                PatchStatus::Unselected => (theme.text_style(), theme.text_style()),
            };
            (arrow.to_string(), arrow_style, name_style)
        }
        Some(file) => match status {
            PatchStatus::Whole => (
                WHOLE_SYMBOL.to_string(),
                theme.staged_style(),
                theme.staged_style(),
            ),
            PatchStatus::Part => (
                PART_SYMBOL.to_string(),
                theme.staged_style(),
                theme.text_style(),
            ),
            PatchStatus::Unselected => (
                file.change_status.to_string(),
                theme.change_status_style(file.change_status),
                theme.text_style(),
            ),
        },
    };

    spans.push(Span::styled(symbol, symbol_style));
    spans.push(Span::raw(" "));

    if options.show_icons {
        let icon = icon_for_file(&name, false, false, is_directory);
        spans.push(Span::styled(
            icon.glyph,
            Style::default().fg(Color::Indexed(icon.color)),
        ));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(name, name_style));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;
    use crate::render::line_text;

    fn row(node: &Node<CommitFile>) -> FlatRow<'_, CommitFile> {
        FlatRow {
            node,
            tree_depth: 1,
            visual_depth: 1,
            collapsed: false,
        }
    }

    fn plain() -> RenderOptions {
        RenderOptions { show_icons: false }
    }

    #[test]
    fn should_render_whole_file_with_filled_circle() {
        let theme = Theme::dark();
        let node = Node::file("src/lib.rs", CommitFile::new("src/lib.rs", 'M'));
        let line = commit_file_line(row(&node), PatchStatus::Whole, &theme, plain());

        assert_eq!(line_text(&line), "  ● lib.rs");
        assert_eq!(line.spans[1].style, theme.staged_style());
        assert_eq!(line.spans.last().expect("name").style, theme.staged_style());
    }

    #[test]
    fn should_render_part_file_with_half_circle_and_default_name() {
        let theme = Theme::dark();
        let node = Node::file("src/lib.rs", CommitFile::new("src/lib.rs", 'M'));
        let line = commit_file_line(row(&node), PatchStatus::Part, &theme, plain());

        assert_eq!(line_text(&line), "  ◐ lib.rs");
        assert_eq!(line.spans[1].style, theme.staged_style());
        assert_eq!(line.spans.last().expect("name").style, theme.text_style());
    }

    #[test]
    fn should_render_unselected_file_with_change_status() {
        let theme = Theme::dark();
        for (status, color) in [
            ('A', Color::Green),
            ('M', Color::Yellow),
            ('R', Color::Yellow),
            ('D', theme.unstaged),
            ('C', Color::Cyan),
            ('T', Color::Magenta),
            ('X', theme.default_text),
        ] {
            let node = Node::file("src/lib.rs", CommitFile::new("src/lib.rs", status));
            let line = commit_file_line(row(&node), PatchStatus::Unselected, &theme, plain());

            assert_eq!(line_text(&line), format!("  {status} lib.rs"));
            assert_eq!(line.spans[1].style.fg, Some(color), "status {status}");
            assert_eq!(line.spans.last().expect("name").style, theme.text_style());
        }
    }

    #[test]
    fn should_color_directory_by_aggregate_status() {
        let theme = Theme::dark();
        let node: Node<CommitFile> = Node::directory("src/ui", vec![]);

        let cases = [
            (PatchStatus::Whole, theme.staged_style(), theme.staged_style()),
            (PatchStatus::Part, theme.staged_style(), theme.text_style()),
            (PatchStatus::Unselected, theme.text_style(), theme.text_style()),
        ];
        for (status, arrow_style, name_style) in cases {
            let line = commit_file_line(row(&node), status, &theme, plain());
            assert_eq!(line_text(&line), "  ▼ ui");
            assert_eq!(line.spans[1].style, arrow_style);
            assert_eq!(line.spans.last().expect("name").style, name_style);
        }
    }

    #[test]
    fn should_show_collapsed_arrow() {
        let theme = Theme::dark();
        let node: Node<CommitFile> = Node::directory("src", vec![]);
        let collapsed = FlatRow {
            node: &node,
            tree_depth: 0,
            visual_depth: 0,
            collapsed: true,
        };
        let line = commit_file_line(collapsed, PatchStatus::Unselected, &theme, plain());
        assert_eq!(line_text(&line), "▶ src");
    }

    #[test]
    fn should_only_add_icon_spans_when_enabled() {
        let theme = Theme::dark();
        let node = Node::file("src/lib.rs", CommitFile::new("src/lib.rs", 'A'));
        let without = commit_file_line(row(&node), PatchStatus::Part, &theme, plain());
        let with = commit_file_line(
            row(&node),
            PatchStatus::Part,
            &theme,
            RenderOptions { show_icons: true },
        );

        let mut stripped = with.spans.clone();
        let removed: Vec<_> = stripped.drain(3..5).collect();
        assert_eq!(removed[0].content, icon_for_file("lib.rs", false, false, false).glyph);
        assert_eq!(stripped, without.spans);
    }
}
