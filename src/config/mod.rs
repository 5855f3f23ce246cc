//! Configuration management for hnsift.
//!
//! Configuration is read from `~/.config/hnsift/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::controller::{DEFAULT_PAGE_SIZE, DEFAULT_QUERY};
use crate::view::ViewOptions;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

/// Search backend and paging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: String,
    pub page_size: u32,
    /// Query used when an empty search is submitted.
    pub default_query: String,
    pub timeout_secs: u64,
    /// Hide results whose title does not contain the text being typed.
    pub live_filter: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://hn.algolia.com/api/v1/search".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            default_query: DEFAULT_QUERY.to_string(),
            timeout_secs: 10,
            live_filter: false,
        }
    }
}

impl SearchConfig {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            live_filter: self.live_filter,
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it when missing.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path`. Missing fields use default values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `~/.config/hnsift/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("hnsift").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, Self::default_config_content()).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn default_config_content() -> &'static str {
        r##"# hnsift configuration
#
# Colors can be named (Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
# DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
# LightCyan, White, Reset) or hex ("#RRGGBB" / "#RGB").
#
# Keys are single characters ("d", "P"), named keys (Enter, Tab, Esc, Up,
# Down, PageUp, PageDown, Home, End, Backspace, Delete, Space, F1-F12) or
# combinations with modifiers ("Ctrl+c", "Alt+Enter").

[search]
base_url = "https://hn.algolia.com/api/v1/search"
page_size = 10
# Used when an empty search is submitted
default_query = "redux"
timeout_secs = 10
# Hide results whose title doesn't contain the text being typed
live_filter = false

[colors]
active_border = "Cyan"
inactive_border = "DarkGray"
header = "Yellow"
selection_bg = "Cyan"
selection_fg = "Black"
error = "LightRed"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
search = ["/"]
load_more = ["m", "PageDown"]
dismiss = ["d", "Delete"]
open_in_browser = ["o", "Enter"]
sort_none = ["0"]
sort_title = ["1"]
sort_author = ["2"]
sort_comments = ["3"]
sort_points = ["4"]
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_deserializes() {
        let config: Config = toml::from_str(Config::default_config_content())
            .expect("Default config should be valid TOML");

        assert_eq!(config.search.page_size, 10);
        assert_eq!(config.search.default_query, "redux");
        assert!(!config.search.live_filter);
        assert_eq!(config.colors.active_border, ratatui::style::Color::Cyan);
        assert_eq!(config.keybindings.dismiss, vec!["d", "Delete"]);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[search]
page_size = 25

[colors]
error = "#FF0000"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.search.page_size, 25);
        assert_eq!(config.search.default_query, "redux");
        assert_eq!(config.colors.error, ratatui::style::Color::Rgb(255, 0, 0));
        assert_eq!(config.colors.header, ratatui::style::Color::Yellow);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.search.base_url, "https://hn.algolia.com/api/v1/search");
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\ndefault_query = \"rust\"\nlive_filter = true").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.search.default_query, "rust");
        assert!(config.search.view_options().live_filter);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search\npage_size = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
