use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::aggregate::ChangeFlags;
use super::escape::escape_special_chars;
use super::flatten::FlatRow;
use super::name::file_name_at_depth;
use super::{COLLAPSED_ARROW, EXPANDED_ARROW, RenderOptions, indentation};
use crate::icons::icon_for_file;
use crate::model::{File, SubmoduleConfig};
use crate::theme::Theme;

/// Renders one working tree row.
///
/// Names stay in the default color unless everything below them is staged.
/// A directory's arrow turns green as soon as anything below it is staged.
pub fn file_line(
    row: FlatRow<'_, File>,
    flags: ChangeFlags,
    submodule_configs: &[SubmoduleConfig],
    theme: &Theme,
    options: RenderOptions,
) -> Line<'static> {
    let name = file_name_at_depth(row.node, row.tree_depth);
    let rest_style = theme.text_style();
    let name_style = if flags.is_fully_staged() {
        theme.staged_style()
    } else {
        rest_style
    };

    let file = row.node.payload();
    let mut spans = vec![Span::raw(indentation(row.visual_depth))];

    match file {
        None => {
            let arrow = if row.collapsed {
                COLLAPSED_ARROW
            } else {
                EXPANDED_ARROW
            };
            let arrow_style = if flags.has_staged_changes {
                theme.staged_style()
            } else {
                rest_style
            };
            spans.push(Span::styled(arrow, arrow_style));
            spans.push(Span::raw(" "));
        }
        Some(file) => {
            spans.extend(short_status_spans(file, theme));
            // Unlike the directory separator, this one carries the text style
            spans.push(Span::styled(" ", rest_style));
        }
    }

    let is_submodule = file.is_some_and(|file| file.is_submodule(submodule_configs));
    let is_linked_worktree = file.is_some_and(|file| file.is_worktree);

    if options.show_icons {
        let icon = icon_for_file(&name, is_submodule, is_linked_worktree, file.is_none());
        spans.push(Span::styled(
            icon.glyph,
            Style::default().fg(Color::Indexed(icon.color)),
        ));
        spans.push(Span::styled(" ", rest_style));
    }

    spans.push(Span::styled(
        escape_special_chars(&name).into_owned(),
        name_style,
    ));

    if is_submodule {
        spans.push(Span::styled(" (submodule)", rest_style));
    }

    Line::from(spans)
}

fn short_status_spans(file: &File, theme: &Theme) -> [Span<'static>; 2] {
    let [index, worktree] = file.short_status;

    let index_style = match index {
        '?' => theme.untracked_style(),
        ' ' => theme.text_style(),
        _ => theme.staged_style(),
    };
    let worktree_style = match worktree {
        ' ' => theme.text_style(),
        _ => theme.unstaged_style(),
    };

    [
        Span::styled(index.to_string(), index_style),
        Span::styled(worktree.to_string(), worktree_style),
    ]
}
