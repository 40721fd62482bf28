//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading storefront configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse TOML config {path}: {message}")]
    Toml { path: PathBuf, message: String },

    /// The config file is not valid JSON for this schema.
    #[error("Failed to parse JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value is present but unusable.
    #[error("Invalid config value for {key}: {message}")]
    Invalid { key: &'static str, message: String },

    /// The effective config could not be rendered.
    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}
