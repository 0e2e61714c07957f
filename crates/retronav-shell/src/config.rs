//! Shell configuration, optionally loaded from a `retronav.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use retronav_types::error::Result;

/// Browser-shell configuration.
///
/// Every field has a default, so a missing or partial config file still
/// produces a usable shell.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    /// Page loaded at startup.
    #[serde(default = "default_home_url")]
    pub home_url: String,
    /// Target of the "Surprise Me" shortcut.
    #[serde(default = "default_surprise_url")]
    pub surprise_url: String,
    /// Scheme prepended to address-bar input that carries none.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
    /// Where the bookmark list is persisted.
    #[serde(default = "default_bookmarks_path")]
    pub bookmarks_path: PathBuf,
    /// Window title for the host shell.
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

fn default_home_url() -> String {
    "https://wiby.org".to_string()
}
fn default_surprise_url() -> String {
    "https://wiby.me/surprise/".to_string()
}
fn default_scheme() -> String {
    "http://".to_string()
}
fn default_bookmarks_path() -> PathBuf {
    PathBuf::from("bookmarks.json")
}
fn default_window_title() -> String {
    "RetroNav".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home_url: default_home_url(),
            surprise_url: default_surprise_url(),
            default_scheme: default_scheme(),
            bookmarks_path: default_bookmarks_path(),
            window_title: default_window_title(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config {} unusable ({e}), using defaults", path.display());
                Self::default()
            },
        }
    }
}
