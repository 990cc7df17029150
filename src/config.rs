//! Configuration module for fzpick
//!
//! Manages default finder settings and the color theme.
//! Configuration is stored in the user's config directory.

use crate::finder::FinderOptions;
use crate::ui::Theme;
use config::{Config, ConfigError, File, FileFormat};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FzpickConfig {
    /// Start in multi-select mode
    pub multi: bool,

    /// Number of entries moved by PAGE-UP/PAGE-DOWN
    pub page_size: usize,

    /// Width of the preview pane in percent of the terminal
    pub preview_percent: u16,

    /// Auto-accept threshold (0 disables)
    pub auto_accept: usize,

    /// Color names for the terminal UI
    pub theme: ThemeConfig,
}

impl Default for FzpickConfig {
    fn default() -> Self {
        let options = FinderOptions::default();
        Self {
            multi: options.multi,
            page_size: options.page_size,
            preview_percent: options.preview_percent,
            auto_accept: options.auto_accept,
            theme: ThemeConfig::default(),
        }
    }
}

impl FzpickConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("fzpick").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// writing fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Finder options carrying the configured defaults
    #[must_use]
    pub fn finder_options(&self) -> FinderOptions {
        FinderOptions::default()
            .with_multi(self.multi)
            .with_page_size(self.page_size)
            .with_preview_percent(self.preview_percent)
            .with_auto_accept(self.auto_accept)
    }
}

/// Color names for the terminal UI
///
/// Names are parsed with ratatui's color parser, so `"red"`, `"lightblue"`,
/// `"#ff8800"` and ANSI indices like `"208"` all work.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub text: String,
    pub title: String,
    pub no_match: String,
    pub query: String,
    pub footer: String,
    pub selected: String,
    pub cursor_fg: String,
    pub cursor_bg: String,
    pub highlight_fg: String,
    pub highlight_bg: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            text: "white".into(),
            title: "yellow".into(),
            no_match: "red".into(),
            query: "yellow".into(),
            footer: "yellow".into(),
            selected: "green".into(),
            cursor_fg: "black".into(),
            cursor_bg: "white".into(),
            highlight_fg: "black".into(),
            highlight_bg: "cyan".into(),
        }
    }
}

/// Parse a color name, keeping `fallback` for unknown names
fn parse_color(key: &str, name: &str, fallback: Color) -> Color {
    name.parse().unwrap_or_else(|_| {
        tracing::warn!(key, name, "unknown color name, using default");
        fallback
    })
}

impl ThemeConfig {
    /// Build the UI theme
    #[must_use]
    pub fn to_theme(&self) -> Theme {
        let base = Theme::default();
        Theme {
            text: parse_color("text", &self.text, base.text),
            title: parse_color("title", &self.title, base.title),
            no_match: parse_color("no_match", &self.no_match, base.no_match),
            query: parse_color("query", &self.query, base.query),
            footer: parse_color("footer", &self.footer, base.footer),
            selected: parse_color("selected", &self.selected, base.selected),
            cursor_fg: parse_color("cursor_fg", &self.cursor_fg, base.cursor_fg),
            cursor_bg: parse_color("cursor_bg", &self.cursor_bg, base.cursor_bg),
            highlight_fg: parse_color("highlight_fg", &self.highlight_fg, base.highlight_fg),
            highlight_bg: parse_color("highlight_bg", &self.highlight_bg, base.highlight_bg),
            ..base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FzpickConfig::default();
        assert!(!config.multi);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.preview_percent, 40);
        assert_eq!(config.auto_accept, 0);
        assert_eq!(config.finder_options(), FinderOptions::default());
    }

    #[test]
    fn test_default_theme_matches_ui_default() {
        assert_eq!(ThemeConfig::default().to_theme(), Theme::default());
    }

    #[test]
    fn test_missing_file_yields_defaults_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fzpick").join("config.toml");
        let config = FzpickConfig::load_from(&path).unwrap();
        assert_eq!(config, FzpickConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = FzpickConfig::default();
        config.multi = true;
        config.page_size = 25;
        config.theme.highlight_bg = "magenta".into();
        config.save_to(&path).unwrap();

        let loaded = FzpickConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "auto_accept = 1\n\n[theme]\nselected = \"blue\"\n").unwrap();

        let config = FzpickConfig::load_from(&path).unwrap();
        assert_eq!(config.auto_accept, 1);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.theme.selected, "blue");
        assert_eq!(config.theme.text, "white");

        let options = config.finder_options();
        assert_eq!(options.auto_accept, 1);
        assert!(!options.multi);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = \"lots\"\n").unwrap();
        assert!(FzpickConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_theme_colors() {
        let theme = ThemeConfig {
            selected: "blue".into(),
            highlight_bg: "#ff8800".into(),
            cursor_bg: "no-such-color".into(),
            ..ThemeConfig::default()
        }
        .to_theme();

        assert_eq!(theme.selected, Color::Blue);
        assert_eq!(theme.highlight_bg, Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(theme.cursor_bg, Theme::default().cursor_bg);
    }
}
