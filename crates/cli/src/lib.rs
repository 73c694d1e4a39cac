//! TechConf settings CLI
//!
//! Loads a configuration variant and prints or validates it.
//!
//! # CLI Usage
//!
//! ```bash
//! # Print every setting, secrets redacted
//! techconf-settings --env production show
//!
//! # Print the connection URI
//! techconf-settings get SQLALCHEMY_DATABASE_URI
//!
//! # Fail if production secrets are missing
//! APP_ENV=production techconf-settings check
//! ```

pub mod cli;
pub mod commands;
pub mod errors;

pub use errors::{CliError, CliResult};
