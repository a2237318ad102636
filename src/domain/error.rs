use std::io;

use thiserror::Error;

use crate::domain::descriptor::SchemaError;

/// Library-wide error type for depgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Descriptor document does not match the schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A git origin is hosted somewhere archives cannot be addressed by tag.
    #[error("git is only supported for github repositories at the moment (dependency '{dependency}' uses '{host}').")]
    UnsupportedOrigin { dependency: String, host: String },

    /// Configuration file is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file was requested explicitly but does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Descriptor file does not exist.
    #[error("Descriptor file not found: {0}")]
    DescriptorNotFound(String),

    /// GitHub API request failed.
    #[error("GitHub API error{}: {message}", .status.map(|s| format!(" ({})", s)).unwrap_or_default())]
    GitHubApi { message: String, status: Option<u16> },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    /// Process exit status the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::UnsupportedOrigin { .. } => 2,
            _ => 1,
        }
    }
}
