use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use toml::Value;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Option<String>,
    /// Show Nerd Font icons next to names
    pub icons: Option<bool>,
    /// Nested tree (true) or flat list of paths (false)
    pub tree_view: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLoadOutcome {
    pub config: Option<AppConfig>,
    pub warnings: Vec<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let appdata = std::env::var_os("APPDATA").map(PathBuf::from);

    config_path_from_parts(xdg_config_home, home, appdata)
}

pub fn config_path_hint() -> &'static str {
    #[cfg(windows)]
    {
        r"%APPDATA%\treeline\config.toml"
    }

    #[cfg(not(windows))]
    {
        "$XDG_CONFIG_HOME/treeline/config.toml (default: ~/.config/treeline/config.toml)"
    }
}

fn config_path_from_parts(
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
    _appdata: Option<PathBuf>,
) -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let base = _appdata
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| anyhow!("Could not determine APPDATA for config directory"))?;
        return Ok(base.join("treeline").join("config.toml"));
    }

    #[cfg(not(windows))]
    {
        let base = match xdg_config_home.filter(|p| !p.as_os_str().is_empty()) {
            Some(base) => base,
            None => home
                .filter(|p| !p.as_os_str().is_empty())
                .ok_or_else(|| anyhow!("Could not determine HOME for config directory"))?
                .join(".config"),
        };
        Ok(base.join("treeline").join("config.toml"))
    }
}

pub fn load_config() -> Result<ConfigLoadOutcome> {
    let path = config_path()?;
    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<ConfigLoadOutcome> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ConfigLoadOutcome::default()),
        Err(err) => return Err(err.into()),
    };

    let value: Value = toml::from_str(&contents)?;
    let table = value
        .as_table()
        .ok_or_else(|| anyhow!("Config root must be a TOML table"))?;

    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    for (key, value) in table {
        match key.as_str() {
            "theme" => match value.as_str() {
                Some(theme) => config.theme = Some(theme.to_string()),
                None => warnings.push(type_warning(key, "a string")),
            },
            "icons" => match value.as_bool() {
                Some(icons) => config.icons = Some(icons),
                None => warnings.push(type_warning(key, "a boolean")),
            },
            "tree_view" => match value.as_bool() {
                Some(tree_view) => config.tree_view = Some(tree_view),
                None => warnings.push(type_warning(key, "a boolean")),
            },
            _ => warnings.push(format!("Warning: Unknown config key '{key}', ignoring")),
        }
    }

    tracing::debug!(path = %path.display(), warnings = warnings.len(), "loaded config");

    Ok(ConfigLoadOutcome {
        config: Some(config),
        warnings,
    })
}

fn type_warning(key: &str, expected: &str) -> String {
    format!("Warning: Config key '{key}' must be {expected}; ignoring value")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn load(contents: &str) -> ConfigLoadOutcome {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("failed to write config");
        load_config_from_path(&path).expect("config should parse")
    }

    #[test]
    fn should_return_none_when_config_file_missing() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        let outcome = load_config_from_path(&path).expect("missing config should not fail");
        assert_eq!(outcome.config, None);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn should_load_all_known_keys() {
        let outcome = load("theme = \"light\"\nicons = true\ntree_view = false\n");
        assert_eq!(
            outcome.config,
            Some(AppConfig {
                theme: Some("light".to_string()),
                icons: Some(true),
                tree_view: Some(false),
            })
        );
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn should_parse_empty_config_as_defaults() {
        let outcome = load("");
        assert_eq!(outcome.config, Some(AppConfig::default()));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn should_error_on_invalid_toml() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme =\n").expect("failed to write config");

        assert!(load_config_from_path(&path).is_err(), "invalid TOML should return error");
    }

    #[test]
    fn should_warn_on_unknown_keys_and_keep_known_values() {
        let outcome = load("icons = true\nicon = false\n");
        assert_eq!(outcome.config.as_ref().and_then(|cfg| cfg.icons), Some(true));
        assert_eq!(
            outcome.warnings,
            vec!["Warning: Unknown config key 'icon', ignoring".to_string()]
        );
    }

    #[test]
    fn should_warn_and_ignore_values_with_invalid_type() {
        let outcome = load("theme = 123\nicons = \"yes\"\n");
        assert_eq!(outcome.config, Some(AppConfig::default()));
        assert_eq!(outcome.warnings.len(), 2);
        assert!(
            outcome
                .warnings
                .contains(&"Warning: Config key 'theme' must be a string; ignoring value".to_string())
        );
        assert!(
            outcome
                .warnings
                .contains(&"Warning: Config key 'icons' must be a boolean; ignoring value".to_string())
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn should_use_xdg_config_home_when_set() {
        let path = config_path_from_parts(
            Some(PathBuf::from("/tmp/xdg-config")),
            Some(PathBuf::from("/tmp/home")),
            None,
        )
        .expect("config path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/xdg-config/treeline/config.toml"));
    }

    #[cfg(not(windows))]
    #[test]
    fn should_fallback_to_home_dot_config_when_xdg_empty() {
        let path = config_path_from_parts(
            Some(PathBuf::from("")),
            Some(PathBuf::from("/home/tester")),
            None,
        )
        .expect("config path should resolve");

        assert_eq!(
            path,
            PathBuf::from("/home/tester/.config/treeline/config.toml")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn should_error_without_home_or_xdg() {
        assert!(config_path_from_parts(None, None, None).is_err());
    }
}
