//! Centralized error handling for the CLI.

use settings::ConfigError;
use thiserror::Error;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type CliResult<T> = Result<T, CliError>;
