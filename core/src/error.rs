//! Error types for loading option registries.
//!
//! Covers every failure mode of turning a declaration file into an
//! [`Options`](crate::Options) registry: I/O, serialization and validation.

use thiserror::Error;

use crate::ValidationError;

/// Errors that can occur while loading or saving an options declaration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The declaration parsed but describes an invalid registry.
    #[error("invalid options: {0}")]
    Invalid(#[from] ValidationError),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
