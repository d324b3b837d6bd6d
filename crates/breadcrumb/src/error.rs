//! Configuration boundary errors.
//!
//! Breadcrumb assembly itself never fails; only loading and validating
//! settings can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading breadcrumb settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings YAML")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid menu machine name: {0:?}")]
    InvalidMenuName(String),

    #[error("menu configured more than once: {0}")]
    DuplicateMenu(String),
}

/// Result type alias using SettingsError.
pub type SettingsResult<T> = Result<T, SettingsError>;
