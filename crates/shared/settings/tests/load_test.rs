//! Integration tests for loading settings from the process environment.
//!
//! Every test touches process-wide environment variables, so they run
//! serially and restore what they change.

use serial_test::serial;

use settings::constants::{
    ENV_DATABASE_URI, ENV_POSTGRES_PW, ENV_SECRET_KEY, ENV_SENDGRID_API_KEY,
    ENV_SERVICE_BUS_CONNECTION_STRING,
};
use settings::{compose_db_url, load, load_named, ConfigError, Variant, RECOGNIZED_SETTINGS};

const MANAGED_VARS: &[&str] = &[
    ENV_DATABASE_URI,
    ENV_POSTGRES_PW,
    ENV_SECRET_KEY,
    ENV_SENDGRID_API_KEY,
    ENV_SERVICE_BUS_CONNECTION_STRING,
];

// =============================================================================
// Helpers
// =============================================================================

/// Clears the managed variables and restores their previous values on drop.
struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn clean() -> Self {
        let saved = MANAGED_VARS
            .iter()
            .map(|key| (*key, std::env::var(key).ok()))
            .collect();
        for key in MANAGED_VARS {
            std::env::remove_var(key);
        }
        Self { saved }
    }

    fn set(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[test]
#[serial]
fn test_load_all_variants_populated() {
    let _env = EnvGuard::clean();

    for variant in Variant::ALL {
        let settings = load(variant);
        assert_eq!(settings.variant, variant);
        assert_eq!(settings.entries().len(), RECOGNIZED_SETTINGS.len());
    }
}

#[test]
#[serial]
fn test_debug_flag_by_variant() {
    let _env = EnvGuard::clean();

    assert!(load(Variant::Development).debug);
    assert!(!load(Variant::Production).debug);
}

#[test]
#[serial]
fn test_uri_override_from_environment() {
    let env = EnvGuard::clean();
    env.set(ENV_DATABASE_URI, "postgresql://override@db/other");

    let settings = load(Variant::Production);
    assert_eq!(settings.database_uri(), "postgresql://override@db/other");
}

#[test]
#[serial]
fn test_uri_defaults_to_composition_when_unset() {
    let env = EnvGuard::clean();
    env.set(ENV_POSTGRES_PW, "Hikari@123");

    let settings = load(Variant::Development);
    assert_eq!(
        settings.database_uri(),
        compose_db_url(
            "hungntt@hungnttdbserver",
            "Hikari@123",
            "hungnttdbserver.postgres.database.azure.com",
            "techconfdb"
        )
    );
}

#[test]
#[serial]
fn test_empty_override_is_ignored() {
    let env = EnvGuard::clean();
    env.set(ENV_DATABASE_URI, "");

    let settings = load(Variant::Development);
    assert_eq!(settings.database_uri(), settings.db_url());
}

#[test]
#[serial]
fn test_load_named_defaults_to_development() {
    let _env = EnvGuard::clean();

    let settings = load_named(None).unwrap();
    assert_eq!(settings.variant, Variant::Development);
    assert!(settings.debug);
}

#[test]
#[serial]
fn test_load_named_blank_selector_defaults_to_development() {
    let _env = EnvGuard::clean();

    for name in ["", "   "] {
        let settings = load_named(Some(name)).unwrap();
        assert_eq!(settings.variant, Variant::Development);
    }
}

#[test]
#[serial]
fn test_uri_override_without_password_passes_secret_check() {
    let env = EnvGuard::clean();
    env.set(ENV_DATABASE_URI, "postgresql://u:p@prod-db/techconfdb");
    env.set(ENV_SECRET_KEY, "key");
    env.set(ENV_SERVICE_BUS_CONNECTION_STRING, "Endpoint=sb://bus/");

    let settings = load(Variant::Production);
    assert_eq!(settings.database_uri(), "postgresql://u:p@prod-db/techconfdb");
    assert!(settings.ensure_secrets().is_ok());
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_uri_falls_back_to_composition() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _env = EnvGuard::clean();
    std::env::set_var(ENV_DATABASE_URI, OsStr::from_bytes(b"postgresql://\xff@db/x"));

    let settings = load(Variant::Development);
    assert_eq!(settings.database_uri(), settings.db_url());
}

#[test]
#[serial]
fn test_load_named_unknown_variant() {
    let _env = EnvGuard::clean();

    let result = load_named(Some("staging"));
    assert_eq!(
        result.unwrap_err(),
        ConfigError::UnknownVariant("staging".to_string())
    );
}

#[test]
#[serial]
fn test_repeated_loads_are_equal() {
    let env = EnvGuard::clean();
    env.set(ENV_SECRET_KEY, "stable-key");

    assert_eq!(load(Variant::Production), load(Variant::Production));
}

#[test]
#[serial]
fn test_production_secret_check() {
    let env = EnvGuard::clean();
    assert!(load(Variant::Production).ensure_secrets().is_err());

    env.set(ENV_POSTGRES_PW, "pw");
    env.set(ENV_SECRET_KEY, "key");
    env.set(ENV_SERVICE_BUS_CONNECTION_STRING, "Endpoint=sb://bus/");
    assert!(load(Variant::Production).ensure_secrets().is_ok());
}

#[test]
fn test_settings_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<settings::Settings>();
}
