use std::path::PathBuf;

use treeline::config::config_path_hint;
use treeline::theme::ThemeArg;

/// CLI arguments parsed from command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Directory inside the repository [default: current directory]
    pub path: Option<PathBuf>,
    /// Show the files of this commit instead of the working tree
    pub commit: Option<String>,
    /// Directories to show collapsed
    pub collapse: Vec<String>,
    /// Commit files fully included in the custom patch
    pub include: Vec<String>,
    /// Commit files partially included in the custom patch
    pub partial: Vec<String>,
    /// Flat list of paths instead of a tree
    pub flat: bool,
    pub icons: Option<bool>,
    pub theme: Option<ThemeArg>,
}

/// Print help message and exit
fn print_help() -> ! {
    let name = std::env::args()
        .next()
        .and_then(|p| {
            std::path::Path::new(&p)
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "treeline".to_string());
    let valid_values = ThemeArg::valid_values_display();
    let config_path = config_path_hint();
    println!(
        "treeline - Print changed files of a git repository as a tree

Usage: {name} [OPTIONS] [PATH]

Arguments:
  [PATH]                 Directory inside the repository [default: .]

Options:
  -c, --commit <REV>     Show the files changed by a commit
      --collapse <DIR>   Show a directory collapsed (repeatable)
      --include <FILE>   Mark a commit file as fully in the custom patch (repeatable)
      --partial <FILE>   Mark a commit file as partially in the custom patch (repeatable)
      --flat             List full paths instead of a tree
      --icons            Show Nerd Font icons
      --no-icons         Hide icons
      --theme <THEME>    Color theme to use [default: dark]
                         Valid values: {valid_values}
                         Precedence: --theme > {config_path} > dark
  -h, --help             Print this help message

Set RUST_LOG=debug to log to stderr."
    );
    std::process::exit(0);
}

/// Parse CLI arguments from command line
pub fn parse_cli_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    parse_cli_args_from(&args).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(2);
    })
}

/// Value of an option given either as `--name value` or `--name=value`.
/// Advances `i` past a separate value.
fn option_value(
    args: &[String],
    i: &mut usize,
    short: Option<&str>,
    long: &str,
) -> Result<Option<String>, String> {
    let arg = &args[*i];

    if let Some(value) = arg
        .strip_prefix(long)
        .and_then(|rest| rest.strip_prefix('='))
    {
        if value.is_empty() {
            return Err(format!("{long} requires a value"));
        }
        return Ok(Some(value.to_string()));
    }

    if arg == long || short.is_some_and(|short| arg == short) {
        let value = args
            .get(*i + 1)
            .filter(|value| !value.starts_with('-'))
            .ok_or_else(|| format!("{arg} requires a value"))?;
        *i += 1;
        return Ok(Some(value.clone()));
    }

    Ok(None)
}

pub fn parse_cli_args_from(args: &[String]) -> Result<CliArgs, String> {
    let mut cli_args = CliArgs::default();

    // First entry is the program name
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();

        match arg {
            "--help" | "-h" => print_help(),
            "--flat" => cli_args.flat = true,
            "--icons" => cli_args.icons = Some(true),
            "--no-icons" => cli_args.icons = Some(false),
            _ => {
                if let Some(value) = option_value(args, &mut i, Some("-c"), "--commit")? {
                    cli_args.commit = Some(value);
                } else if let Some(value) = option_value(args, &mut i, None, "--collapse")? {
                    cli_args.collapse.push(value.trim_end_matches('/').to_string());
                } else if let Some(value) = option_value(args, &mut i, None, "--include")? {
                    cli_args.include.push(value);
                } else if let Some(value) = option_value(args, &mut i, None, "--partial")? {
                    cli_args.partial.push(value);
                } else if let Some(value) = option_value(args, &mut i, None, "--theme")? {
                    let valid_values = ThemeArg::valid_values_display();
                    cli_args.theme = ThemeArg::from_str(&value)
                        .ok_or_else(|| {
                            format!("Unknown theme '{value}'. Valid options: {valid_values}")
                        })
                        .map(Some)?;
                } else if arg.starts_with('-') {
                    return Err(format!("Unknown option '{arg}'"));
                } else if cli_args.path.is_some() {
                    return Err(format!("Unexpected argument '{arg}'"));
                } else {
                    cli_args.path = Some(PathBuf::from(arg));
                }
            }
        }

        i += 1;
    }

    Ok(cli_args)
}
