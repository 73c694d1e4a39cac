//! Configuration errors.
//!
//! Loading a known variant cannot fail; these errors cover the selector,
//! lookups by name and the production secret check.

use thiserror::Error;

/// Errors raised while selecting or inspecting settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The variant selector is not one of the known profiles
    #[error("Unknown configuration variant '{0}' (expected 'development' or 'production')")]
    UnknownVariant(String),

    /// No setting is registered under this name
    #[error("Unknown setting '{0}'")]
    UnknownSetting(String),

    /// Secrets still resolved to their placeholders
    #[error("Missing secrets: {}", .0.join(", "))]
    MissingSecrets(Vec<&'static str>),
}

impl ConfigError {
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        ConfigError::UnknownVariant(name.into())
    }

    pub fn unknown_setting(name: impl Into<String>) -> Self {
        ConfigError::UnknownSetting(name.into())
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
