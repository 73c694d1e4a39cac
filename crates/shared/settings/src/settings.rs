//! Resolved application settings and the loader that builds them.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::constants::{
    DEFAULT_ADMIN_EMAIL_ADDRESS, DEFAULT_CONFERENCE_ID, DEFAULT_POSTGRES_DB, DEFAULT_POSTGRES_URL,
    DEFAULT_POSTGRES_USER, DEFAULT_SERVICE_BUS_QUEUE_NAME, ENV_DATABASE_URI, ENV_POSTGRES_PW,
    ENV_SECRET_KEY, ENV_SENDGRID_API_KEY, ENV_SERVICE_BUS_CONNECTION_STRING, PLACEHOLDER_EMPTY,
    PLACEHOLDER_SECRET_KEY, POSTGRES_SCHEME, REDACTED,
};
use crate::env::{EnvSource, ProcessEnv};
use crate::error::{ConfigError, ConfigResult};
use crate::variant::Variant;

// =============================================================================
// Setting names
// =============================================================================

/// Debug mode flag, set by the variant
pub const DEBUG: &str = "DEBUG";
/// PostgreSQL server host
pub const POSTGRES_URL: &str = "POSTGRES_URL";
/// PostgreSQL login
pub const POSTGRES_USER: &str = "POSTGRES_USER";
/// PostgreSQL password
pub const POSTGRES_PW: &str = "POSTGRES_PW";
/// Database name
pub const POSTGRES_DB: &str = "POSTGRES_DB";
/// Connection URI composed from the PostgreSQL components
pub const DB_URL: &str = "DB_URL";
/// Connection URI the application uses
pub const SQLALCHEMY_DATABASE_URI: &str = "SQLALCHEMY_DATABASE_URI";
/// Conference served by this deployment
pub const CONFERENCE_ID: &str = "CONFERENCE_ID";
/// Session and token signing key
pub const SECRET_KEY: &str = "SECRET_KEY";
/// Service Bus namespace connection string
pub const SERVICE_BUS_CONNECTION_STRING: &str = "SERVICE_BUS_CONNECTION_STRING";
/// Notification queue name
pub const SERVICE_BUS_QUEUE_NAME: &str = "SERVICE_BUS_QUEUE_NAME";
/// Sender address for notifications
pub const ADMIN_EMAIL_ADDRESS: &str = "ADMIN_EMAIL_ADDRESS";
/// SendGrid API key, empty when mail is disabled
pub const SENDGRID_API_KEY: &str = "SENDGRID_API_KEY";

/// Every setting name, in display order
pub const RECOGNIZED_SETTINGS: &[&str] = &[
    DEBUG,
    POSTGRES_URL,
    POSTGRES_USER,
    POSTGRES_PW,
    POSTGRES_DB,
    DB_URL,
    SQLALCHEMY_DATABASE_URI,
    CONFERENCE_ID,
    SECRET_KEY,
    SERVICE_BUS_CONNECTION_STRING,
    SERVICE_BUS_QUEUE_NAME,
    ADMIN_EMAIL_ADDRESS,
    SENDGRID_API_KEY,
];

/// Settings whose values carry credentials
pub const SECRET_SETTINGS: &[&str] = &[
    POSTGRES_PW,
    DB_URL,
    SQLALCHEMY_DATABASE_URI,
    SECRET_KEY,
    SERVICE_BUS_CONNECTION_STRING,
    SENDGRID_API_KEY,
];

/// Whether `name` holds a credential.
pub fn is_secret(name: &str) -> bool {
    SECRET_SETTINGS.contains(&name)
}

// =============================================================================
// Values
// =============================================================================

/// A single setting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl SettingValue {
    /// String payload, if this is a string setting.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Flag payload, if this is a boolean setting.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Str(s) => f.write_str(s),
            SettingValue::Int(i) => write!(f, "{}", i),
            SettingValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Fully resolved settings for one variant.
///
/// Built once by [`load`] and shared read-only afterwards. Credentials are
/// kept private and exposed through accessors so they never leak through
/// `Debug` or serialization.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub variant: Variant,
    pub debug: bool,
    pub postgres_url: String,
    pub postgres_user: String,
    postgres_pw: String,
    pub postgres_db: String,
    db_url: String,
    database_uri: String,
    pub conference_id: i64,
    secret_key: String,
    service_bus_connection_string: String,
    pub service_bus_queue_name: String,
    pub admin_email_address: String,
    sendgrid_api_key: String,
    placeholder_secrets: Vec<&'static str>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("variant", &self.variant)
            .field("debug", &self.debug)
            .field("postgres_url", &self.postgres_url)
            .field("postgres_user", &self.postgres_user)
            .field("postgres_pw", &REDACTED)
            .field("postgres_db", &self.postgres_db)
            .field("db_url", &REDACTED)
            .field("database_uri", &REDACTED)
            .field("conference_id", &self.conference_id)
            .field("secret_key", &REDACTED)
            .field("service_bus_connection_string", &REDACTED)
            .field("service_bus_queue_name", &self.service_bus_queue_name)
            .field("admin_email_address", &self.admin_email_address)
            .field("sendgrid_api_key", &REDACTED)
            .finish()
    }
}

impl Settings {
    pub fn postgres_pw(&self) -> &str {
        &self.postgres_pw
    }

    /// Connection URI composed from the PostgreSQL components.
    pub fn db_url(&self) -> &str {
        &self.db_url
    }

    /// Connection URI the application should use.
    pub fn database_uri(&self) -> &str {
        &self.database_uri
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Secret key bytes for signing sessions and tokens.
    pub fn secret_key_bytes(&self) -> &[u8] {
        self.secret_key.as_bytes()
    }

    pub fn service_bus_connection_string(&self) -> &str {
        &self.service_bus_connection_string
    }

    /// SendGrid key, if one was configured.
    pub fn sendgrid_api_key(&self) -> Option<&str> {
        Some(self.sendgrid_api_key.as_str()).filter(|key| !key.is_empty())
    }

    /// Value of the setting called `name`.
    pub fn get(&self, name: &str) -> Option<SettingValue> {
        let value = match name {
            DEBUG => SettingValue::Bool(self.debug),
            POSTGRES_URL => SettingValue::Str(self.postgres_url.clone()),
            POSTGRES_USER => SettingValue::Str(self.postgres_user.clone()),
            POSTGRES_PW => SettingValue::Str(self.postgres_pw.clone()),
            POSTGRES_DB => SettingValue::Str(self.postgres_db.clone()),
            DB_URL => SettingValue::Str(self.db_url.clone()),
            SQLALCHEMY_DATABASE_URI => SettingValue::Str(self.database_uri.clone()),
            CONFERENCE_ID => SettingValue::Int(self.conference_id),
            SECRET_KEY => SettingValue::Str(self.secret_key.clone()),
            SERVICE_BUS_CONNECTION_STRING => {
                SettingValue::Str(self.service_bus_connection_string.clone())
            }
            SERVICE_BUS_QUEUE_NAME => SettingValue::Str(self.service_bus_queue_name.clone()),
            ADMIN_EMAIL_ADDRESS => SettingValue::Str(self.admin_email_address.clone()),
            SENDGRID_API_KEY => SettingValue::Str(self.sendgrid_api_key.clone()),
            _ => return None,
        };
        Some(value)
    }

    /// Like [`Settings::get`], but an unknown name is an error.
    pub fn require(&self, name: &str) -> ConfigResult<SettingValue> {
        self.get(name)
            .ok_or_else(|| ConfigError::unknown_setting(name))
    }

    /// Every setting with its raw value.
    pub fn entries(&self) -> Vec<(&'static str, SettingValue)> {
        RECOGNIZED_SETTINGS
            .iter()
            .filter_map(|name| self.get(name).map(|value| (*name, value)))
            .collect()
    }

    /// Every setting, with non-empty secret values masked.
    pub fn redacted_entries(&self) -> Vec<(&'static str, SettingValue)> {
        self.entries()
            .into_iter()
            .map(|(name, value)| {
                let masked = is_secret(name) && value != SettingValue::Str(String::new());
                if masked {
                    (name, SettingValue::Str(REDACTED.to_string()))
                } else {
                    (name, value)
                }
            })
            .collect()
    }

    /// Required secrets that fell back to placeholders.
    pub fn insecure_settings(&self) -> &[&'static str] {
        &self.placeholder_secrets
    }

    /// Fail unless every required secret came from the environment.
    pub fn ensure_secrets(&self) -> ConfigResult<()> {
        if self.placeholder_secrets.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingSecrets(self.placeholder_secrets.clone()))
        }
    }
}

impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.redacted_entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (name, value) in &entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Compose `postgresql://{user}:{pw}@{host}/{db}`.
///
/// User and password are percent-encoded so an `@` inside them cannot be
/// read as the host separator.
pub fn compose_db_url(user: &str, password: &str, host: &str, database: &str) -> String {
    format!(
        "{}://{}:{}@{}/{}",
        POSTGRES_SCHEME,
        urlencoding::encode(user),
        urlencoding::encode(password),
        host,
        database
    )
}

/// Load `variant` against the process environment.
pub fn load(variant: Variant) -> Settings {
    load_with(variant, &ProcessEnv)
}

/// Parse a variant selector and load it.
///
/// `None` or a blank selector picks the default variant.
pub fn load_named(name: Option<&str>) -> ConfigResult<Settings> {
    let variant = match name.filter(|name| !name.trim().is_empty()) {
        Some(name) => name.parse::<Variant>()?,
        None => Variant::default(),
    };
    Ok(load(variant))
}

/// Resolve settings for `variant` from literal defaults and `env`.
pub fn load_with<E: EnvSource + ?Sized>(variant: Variant, env: &E) -> Settings {
    let mut placeholder_secrets = Vec::new();

    let uri_override = env.non_empty(ENV_DATABASE_URI);

    // The password only feeds the composed URI, so an override makes it optional
    let postgres_pw = if uri_override.is_some() {
        env.non_empty(ENV_POSTGRES_PW)
            .unwrap_or_else(|| PLACEHOLDER_EMPTY.to_string())
    } else {
        secret(env, ENV_POSTGRES_PW, PLACEHOLDER_EMPTY, &mut placeholder_secrets)
    };
    let secret_key = secret(env, ENV_SECRET_KEY, PLACEHOLDER_SECRET_KEY, &mut placeholder_secrets);
    let service_bus_connection_string = secret(
        env,
        ENV_SERVICE_BUS_CONNECTION_STRING,
        PLACEHOLDER_EMPTY,
        &mut placeholder_secrets,
    );
    // Optional: no SendGrid account is required
    let sendgrid_api_key = env
        .non_empty(ENV_SENDGRID_API_KEY)
        .unwrap_or_else(|| PLACEHOLDER_EMPTY.to_string());

    let db_url = compose_db_url(
        DEFAULT_POSTGRES_USER,
        &postgres_pw,
        DEFAULT_POSTGRES_URL,
        DEFAULT_POSTGRES_DB,
    );
    let database_uri = match uri_override {
        Some(uri) => {
            tracing::debug!("Using connection URI from {}", ENV_DATABASE_URI);
            uri
        }
        None => db_url.clone(),
    };

    let settings = Settings {
        variant,
        debug: variant.debug(),
        postgres_url: DEFAULT_POSTGRES_URL.to_string(),
        postgres_user: DEFAULT_POSTGRES_USER.to_string(),
        postgres_pw,
        postgres_db: DEFAULT_POSTGRES_DB.to_string(),
        db_url,
        database_uri,
        conference_id: DEFAULT_CONFERENCE_ID,
        secret_key,
        service_bus_connection_string,
        service_bus_queue_name: DEFAULT_SERVICE_BUS_QUEUE_NAME.to_string(),
        admin_email_address: DEFAULT_ADMIN_EMAIL_ADDRESS.to_string(),
        sendgrid_api_key,
        placeholder_secrets,
    };

    tracing::debug!(variant = %variant, debug = settings.debug, "Settings loaded");
    settings
}

/// Read a required secret, recording `key` when the placeholder is used.
fn secret<E: EnvSource + ?Sized>(
    env: &E,
    key: &'static str,
    placeholder: &str,
    missing: &mut Vec<&'static str>,
) -> String {
    env.non_empty(key).unwrap_or_else(|| {
        tracing::warn!("{} not set, using insecure placeholder", key);
        missing.push(key);
        placeholder.to_string()
    })
}
