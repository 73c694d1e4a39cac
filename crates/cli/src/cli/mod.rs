//! CLI module - Command-line interface for the settings provider.
//!
//! Provides commands for:
//! - `show` - Print all settings
//! - `get` - Print one setting
//! - `check` - Validate secrets

pub mod args;

pub use args::{Cli, Commands};
