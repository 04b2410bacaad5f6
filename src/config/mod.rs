//! Configuration for tidings.
//!
//! Feed URLs come from the `RSS_FEEDS_URL` environment variable. Appearance and
//! keybindings come from `~/.config/tidings/config.toml` when that file exists;
//! it is never created or written.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const FEEDS_ENV_VAR: &str = "RSS_FEEDS_URL";

const DEFAULT_TITLE: &str = "RSS feeds";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub feeds: FeedList,
    pub title: String,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feeds: FeedList::default(),
            title: DEFAULT_TITLE.to_string(),
            colors: ColorConfig::default(),
            keybindings: KeybindingConfig::default(),
        }
    }
}

impl Config {
    /// Load the UI settings from the default path, if any, and the feed list
    /// from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.feeds = FeedList::from_env();
        Ok(config)
    }

    /// Parse a config file. The feed list is left empty.
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

    /// `~/.config/tidings/config.toml` on Linux; `None` when the platform has
    /// no config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tidings").join("config.toml"))
    }

    pub fn with_feeds(mut self, feeds: FeedList) -> Self {
        self.feeds = feeds;
        self
    }
}

/// Feed URLs in the order they were configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedList {
    urls: Vec<String>,
}

impl FeedList {
    /// Split on commas. Tokens are kept verbatim, empty ones included, so an
    /// empty string yields one empty URL.
    pub fn parse(raw: &str) -> Self {
        Self {
            urls: raw.split(',').map(str::to_string).collect(),
        }
    }

    /// An unset variable is treated like an empty one.
    pub fn from_env() -> Self {
        Self::parse(&std::env::var(FEEDS_ENV_VAR).unwrap_or_default())
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
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
