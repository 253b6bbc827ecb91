//! Runtime configuration for keel.
//!
//! Configuration is read from a TOML document whose `[type_mapper]` table
//! overrides the relational type mapper's sized and decimal facets. Every
//! field is optional; omitted fields keep the documented defaults.

use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

pub const DEFAULT_KEY_STRING_CAPACITY: u32 = 128;
pub const DEFAULT_NON_KEY_STRING_CAPACITY: u32 = 4000;
pub const DEFAULT_DECIMAL_PRECISION: u8 = 18;
pub const DEFAULT_DECIMAL_SCALE: u8 = 2;
pub const DEFAULT_ROW_VERSION_SIZE: u32 = 8;

/// Largest precision a decimal parameter may declare.
pub const MAX_DECIMAL_PRECISION: u8 = 28;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

///
/// KeelConfig
/// Root of the TOML document.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct KeelConfig {
    pub type_mapper: TypeMapperConfig,
}

impl KeelConfig {
    /// Parse and validate a configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.type_mapper.validate()
    }
}

///
/// TypeMapperConfig
///
/// Facets used when the type mapper builds its sized and decimal mappings.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TypeMapperConfig {
    /// Capacity of string columns that participate in a key.
    pub key_string_capacity: u32,
    /// Capacity of all other string columns.
    pub non_key_string_capacity: u32,
    pub decimal_precision: u8,
    pub decimal_scale: u8,
    /// Size in bytes of the row-version concurrency token.
    pub row_version_size: u32,
}

impl TypeMapperConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_string_capacity == 0 {
            return Err(invalid("key_string_capacity", "must be greater than zero"));
        }
        if self.non_key_string_capacity == 0 {
            return Err(invalid(
                "non_key_string_capacity",
                "must be greater than zero",
            ));
        }
        if self.row_version_size == 0 {
            return Err(invalid("row_version_size", "must be greater than zero"));
        }
        if !(1..=MAX_DECIMAL_PRECISION).contains(&self.decimal_precision) {
            return Err(invalid(
                "decimal_precision",
                format!("must be between 1 and {MAX_DECIMAL_PRECISION}"),
            ));
        }
        if self.decimal_scale > self.decimal_precision {
            return Err(invalid(
                "decimal_scale",
                format!(
                    "scale {} exceeds precision {}",
                    self.decimal_scale, self.decimal_precision
                ),
            ));
        }

        Ok(())
    }
}

impl Default for TypeMapperConfig {
    fn default() -> Self {
        Self {
            key_string_capacity: DEFAULT_KEY_STRING_CAPACITY,
            non_key_string_capacity: DEFAULT_NON_KEY_STRING_CAPACITY,
            decimal_precision: DEFAULT_DECIMAL_PRECISION,
            decimal_scale: DEFAULT_DECIMAL_SCALE,
            row_version_size: DEFAULT_ROW_VERSION_SIZE,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

///
/// TESTS
///
