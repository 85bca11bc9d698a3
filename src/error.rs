//! `ClickDemo` Error Types
//!
//! Centralized error handling using thiserror for type-safe errors.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for `ClickDemo`
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Shell error: {0}")]
    Shell(#[from] ShellError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Application shell errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellError {
    #[error("Tap received before the application finished launching")]
    NotLaunched,

    #[error("Application delegate rejected the launch notification")]
    LaunchRejected,
}

/// Logging setup errors
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Result type alias for `ClickDemo` operations
pub type Result<T> = std::result::Result<T, DemoError>;
