//! Settings provider for the TechConf web application.
//!
//! This crate provides:
//! - Literal defaults for the database, Service Bus and mail integrations
//! - Development and production variants layered over those defaults
//! - Environment overrides for the connection URI and every secret
//!
//! ```no_run
//! let settings = settings::load_named(Some("production"))?;
//! println!("{}", settings.database_uri());
//! # Ok::<(), settings::ConfigError>(())
//! ```

pub mod constants;
pub mod env;
pub mod error;
pub mod settings;
pub mod variant;

pub use env::{EnvSource, ProcessEnv};
pub use error::{ConfigError, ConfigResult};
pub use settings::{
    compose_db_url, load, load_named, load_with, SettingValue, Settings, RECOGNIZED_SETTINGS,
};
pub use variant::Variant;
