//! Configuration variants.
//!
//! Each variant is a row in a small override table merged onto the base
//! defaults. Only the debug flag differs today.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Named configuration profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Development,
    Production,
}

/// Values a variant layers over the base defaults. `None` keeps the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariantOverrides {
    pub debug: Option<bool>,
}

/// Base value of the debug flag before variant overrides
pub(crate) const BASE_DEBUG: bool = true;

impl Variant {
    /// All known variants
    pub const ALL: [Variant; 2] = [Variant::Development, Variant::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Development => "development",
            Variant::Production => "production",
        }
    }

    /// Override table row for this variant.
    pub fn overrides(&self) -> VariantOverrides {
        match self {
            Variant::Development => VariantOverrides { debug: Some(true) },
            Variant::Production => VariantOverrides { debug: Some(false) },
        }
    }

    /// Debug flag after merging this variant onto the base.
    pub fn debug(&self) -> bool {
        self.overrides().debug.unwrap_or(BASE_DEBUG)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Variant::Production)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::unknown_variant(s))
    }
}
