//! Environment lookup abstraction.
//!
//! Settings are resolved against an [`EnvSource`] so the transform stays pure
//! and callers can supply a fixed snapshot instead of the process environment.

use std::collections::HashMap;
use std::env::{self, VarError};

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Raw value of `key`, if present.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key` when present and non-empty.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!("{} is not valid unicode, treating it as unset", key);
                None
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
