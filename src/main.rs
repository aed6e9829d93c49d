mod cli;
mod logging;

use std::io;
use std::path::PathBuf;

use ratatui::text::Line;
use treeline::config::{AppConfig, load_config};
use treeline::error::{Result, TreelineError};
use treeline::model::{FileTree, PatchSelection, PatchStatus};
use treeline::output::{should_use_color, write_lines};
use treeline::render::{RenderOptions, render_commit_file_tree, render_file_tree};
use treeline::theme::{Theme, resolve_theme_with_config};
use treeline::vcs::{VcsBackend, detect_vcs};

use cli::{CliArgs, parse_cli_args};

/// Settings resolved from CLI flags, the config file and defaults
struct ViewSettings {
    theme: Theme,
    options: RenderOptions,
    tree_view: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli_args = parse_cli_args();
    let settings = resolve_settings(&cli_args);

    let path = cli_args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let backend = match detect_vcs(&path) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("\nMake sure {} is inside a git repository.", path.display());
            std::process::exit(1);
        }
    };

    let info = backend.info();
    tracing::info!(
        root = %info.root_path.display(),
        branch = info.branch_name.as_deref().unwrap_or("(detached)"),
        "opened repository"
    );

    let lines = match cli_args.commit.as_deref() {
        Some(revision) => commit_lines(backend.as_ref(), revision, &cli_args, &settings),
        None => working_tree_lines(backend.as_ref(), &cli_args, &settings),
    };

    match lines {
        Ok(lines) => {
            let mut stdout = io::stdout().lock();
            write_lines(&mut stdout, &lines, should_use_color())?;
        }
        Err(TreelineError::NoChanges) => println!("No changes"),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn resolve_settings(cli_args: &CliArgs) -> ViewSettings {
    let config = match load_config() {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                eprintln!("{warning}");
            }
            outcome.config.unwrap_or_default()
        }
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e}");
            AppConfig::default()
        }
    };

    let (theme, warnings) = resolve_theme_with_config(cli_args.theme, config.theme.as_deref());
    for warning in warnings {
        eprintln!("{warning}");
    }

    ViewSettings {
        theme,
        options: RenderOptions {
            show_icons: cli_args.icons.or(config.icons).unwrap_or(false),
        },
        tree_view: !cli_args.flat && config.tree_view.unwrap_or(true),
    }
}

fn working_tree_lines(
    backend: &dyn VcsBackend,
    cli_args: &CliArgs,
    settings: &ViewSettings,
) -> Result<Vec<Line<'static>>> {
    let files = backend.working_tree_files()?;
    if files.is_empty() {
        return Err(TreelineError::NoChanges);
    }
    let submodule_configs = backend.submodule_configs()?;

    let mut tree = FileTree::new(files, settings.tree_view);
    for path in &cli_args.collapse {
        tree.collapse(path.as_str());
    }

    Ok(render_file_tree(
        &tree,
        &submodule_configs,
        &settings.theme,
        settings.options,
    ))
}

fn commit_lines(
    backend: &dyn VcsBackend,
    revision: &str,
    cli_args: &CliArgs,
    settings: &ViewSettings,
) -> Result<Vec<Line<'static>>> {
    let changes = backend.commit_changes(revision)?;
    if changes.files.is_empty() {
        return Err(TreelineError::NoChanges);
    }
    tracing::info!(commit = %changes.short_id, summary = %changes.summary, "rendering commit");

    let mut selection = PatchSelection::new();
    for file in &cli_args.partial {
        selection.set_status(file, &changes.commit_id, PatchStatus::Part);
    }
    for file in &cli_args.include {
        selection.set_status(file, &changes.commit_id, PatchStatus::Whole);
    }

    let mut tree = FileTree::new(changes.files, settings.tree_view);
    for path in &cli_args.collapse {
        tree.collapse(path.as_str());
    }

    Ok(render_commit_file_tree(
        &tree,
        &changes.commit_id,
        &selection,
        &settings.theme,
        settings.options,
    ))
}
