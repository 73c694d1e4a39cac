//! Literal defaults and environment variable names.
//!
//! Centralized location for every value the provider falls back to.

// =============================================================================
// Database
// =============================================================================

/// Default PostgreSQL server host
pub const DEFAULT_POSTGRES_URL: &str = "hungnttdbserver.postgres.database.azure.com";

/// Default PostgreSQL login (Azure style `user@server`)
pub const DEFAULT_POSTGRES_USER: &str = "hungntt@hungnttdbserver";

/// Default database name
pub const DEFAULT_POSTGRES_DB: &str = "techconfdb";

/// URI scheme used when composing the connection string
pub const POSTGRES_SCHEME: &str = "postgresql";

// =============================================================================
// Application
// =============================================================================

/// Identifier of the conference served by this deployment
pub const DEFAULT_CONFERENCE_ID: i64 = 1;

/// Address notifications are sent from
pub const DEFAULT_ADMIN_EMAIL_ADDRESS: &str = "info@techconf.com";

// =============================================================================
// Service Bus
// =============================================================================

/// Queue that receives notification messages
pub const DEFAULT_SERVICE_BUS_QUEUE_NAME: &str = "notificationqueue";

// =============================================================================
// Secret placeholders
// =============================================================================

/// Signing key used when SECRET_KEY is absent. Not for production.
pub const PLACEHOLDER_SECRET_KEY: &str = "dev-secret-key-not-for-production";

/// Stand-in for secrets that have no usable development value
pub const PLACEHOLDER_EMPTY: &str = "";

// =============================================================================
// Environment variables
// =============================================================================

/// Overrides the composed connection URI when set and non-empty
pub const ENV_DATABASE_URI: &str = "SQLALCHEMY_DATABASE_URI";

/// PostgreSQL password, required unless the URI is overridden
pub const ENV_POSTGRES_PW: &str = "POSTGRES_PW";

/// Session and token signing key
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";

/// Service Bus namespace connection string
pub const ENV_SERVICE_BUS_CONNECTION_STRING: &str = "SERVICE_BUS_CONNECTION_STRING";

/// Optional SendGrid API key
pub const ENV_SENDGRID_API_KEY: &str = "SENDGRID_API_KEY";

/// Marker printed in place of secret values
pub const REDACTED: &str = "[REDACTED]";
