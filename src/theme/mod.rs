//! Color themes for rendered file trees.

use ratatui::style::{Color, Style};

/// Colors used when rendering file tree lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Names, separators and anything without a more specific color
    pub default_text: Color,

    // Working tree accents
    pub staged: Color,
    pub unstaged: Color,
    pub untracked: Color,

    // Commit file change status colors
    pub file_added: Color,
    pub file_modified: Color,
    pub file_copied: Color,
    pub file_type_changed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            default_text: Color::White,

            staged: Color::Green,
            unstaged: Color::Red,
            untracked: Color::Red,

            file_added: Color::Green,
            file_modified: Color::Yellow,
            file_copied: Color::Cyan,
            file_type_changed: Color::Magenta,
        }
    }

    /// Darker accents for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            default_text: Color::Black,

            staged: Color::Rgb(0, 100, 0),
            unstaged: Color::Rgb(160, 0, 0),
            untracked: Color::Rgb(160, 0, 0),

            file_added: Color::Rgb(0, 100, 0),
            file_modified: Color::Rgb(140, 80, 0),
            file_copied: Color::Rgb(0, 100, 120),
            file_type_changed: Color::Rgb(100, 0, 100),
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.default_text)
    }

    pub fn staged_style(&self) -> Style {
        Style::default().fg(self.staged)
    }

    pub fn unstaged_style(&self) -> Style {
        Style::default().fg(self.unstaged)
    }

    pub fn untracked_style(&self) -> Style {
        Style::default().fg(self.untracked)
    }

    /// Style for a commit file's single-letter change status.
    pub fn change_status_style(&self, change_status: char) -> Style {
        match change_status {
            'A' => Style::default().fg(self.file_added),
            'M' | 'R' => Style::default().fg(self.file_modified),
            'D' => self.unstaged_style(),
            'C' => Style::default().fg(self.file_copied),
            'T' => Style::default().fg(self.file_type_changed),
            _ => self.text_style(),
        }
    }
}

/// Theme selection from the command line or config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeArg {
    #[default]
    Dark,
    Light,
}

const THEME_CHOICES: [(&str, ThemeArg); 2] = [("dark", ThemeArg::Dark), ("light", ThemeArg::Light)];

impl ThemeArg {
    pub fn choices() -> &'static [(&'static str, ThemeArg)] {
        &THEME_CHOICES
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::choices()
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, theme)| *theme)
    }

    pub fn valid_values_display() -> String {
        Self::choices()
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn resolve_theme(arg: ThemeArg) -> Theme {
    match arg {
        ThemeArg::Dark => Theme::dark(),
        ThemeArg::Light => Theme::light(),
    }
}

/// Picks the theme with precedence CLI > config > dark. Unknown config
/// values fall back to dark with a warning.
pub fn resolve_theme_arg_with_config(
    cli_theme: Option<ThemeArg>,
    config_theme: Option<&str>,
) -> (ThemeArg, Vec<String>) {
    let mut warnings = Vec::new();

    if let Some(theme) = cli_theme {
        return (theme, warnings);
    }

    if let Some(config_theme) = config_theme {
        if let Some(theme) = ThemeArg::from_str(config_theme) {
            return (theme, warnings);
        }

        let valid_values = ThemeArg::valid_values_display();
        warnings.push(format!(
            "Warning: Unknown theme '{config_theme}' in config, using dark. Valid options: {valid_values}"
        ));
    }

    (ThemeArg::Dark, warnings)
}

pub fn resolve_theme_with_config(
    cli_theme: Option<ThemeArg>,
    config_theme: Option<&str>,
) -> (Theme, Vec<String>) {
    let (theme_arg, warnings) = resolve_theme_arg_with_config(cli_theme, config_theme);
    (resolve_theme(theme_arg), warnings)
}
