//! Error types for RetroNav.

use std::io;

/// Errors produced by the RetroNav shell.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("config error: {0}")]
    Config(String),

    #[error("engine error: {0}")]
    Engine(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NavError>;
