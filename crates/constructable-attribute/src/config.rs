//! Declarative attribute configuration
//!
//! Provides [`AttributeConfig`], the serializable subset of
//! [`AttributeOptions`]. Callbacks cannot be expressed in configuration; add
//! them to the options returned by [`AttributeConfig::into_options`].
//!
//! Unknown keys are ignored, so configuration written for a newer version
//! still loads.
//!
//! # Example
//!
//! ```rust
//! use constructable_attribute::load_toml_table;
//!
//! let attributes = load_toml_table(r#"
//!     [port]
//!     validate_type = "Integer"
//!     default = 8080
//!     readable = true
//! "#).unwrap();
//!
//! assert_eq!(attributes[0].storage_key(), "@port");
//! ```

use crate::attribute::Attribute;
use crate::error::ConfigError;
use crate::name::AttributeName;
use crate::options::AttributeOptions;
use constructable_value::{Value, ValueType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Serializable attribute options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeConfig {
    /// Require presence in the input
    pub required: bool,

    /// Type tag provided values must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_type: Option<ValueType>,

    /// Value used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Readable and writable
    pub accessible: bool,

    /// Readable
    pub readable: bool,

    /// Writable
    pub writable: bool,
}

impl AttributeConfig {
    /// Parse a single attribute's options from TOML
    ///
    /// # Errors
    /// Returns [`ConfigError::Toml`] on malformed input.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a single attribute's options from JSON
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] on malformed input.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Declarative fields of existing options
    #[must_use]
    pub fn from_options(options: &AttributeOptions) -> Self {
        Self {
            required: options.required(),
            validate_type: options.validate_type(),
            default: options.default_value().cloned(),
            accessible: options.accessible(),
            readable: options.readable(),
            writable: options.writable(),
        }
    }

    /// Options carrying these settings and no callbacks
    #[must_use]
    pub fn into_options(self) -> AttributeOptions {
        let mut options = AttributeOptions::new()
            .with_required(self.required)
            .with_accessible(self.accessible)
            .with_readable(self.readable)
            .with_writable(self.writable);

        if let Some(ty) = self.validate_type {
            options = options.with_validate_type(ty);
        }
        if let Some(default) = self.default {
            options = options.with_default(default);
        }
        options
    }

    /// Descriptor named `name` with these settings
    #[must_use]
    pub fn into_attribute(self, name: impl Into<AttributeName>) -> Attribute {
        Attribute::new(name, self.into_options())
    }
}

/// Parse a TOML table of `name → options` into descriptors, in document order
///
/// # Errors
/// Returns [`ConfigError::Toml`] on malformed input.
pub fn load_toml_table(source: &str) -> Result<Vec<Attribute>, ConfigError> {
    let table: IndexMap<String, AttributeConfig> = toml::from_str(source)?;
    Ok(into_attributes(table))
}

/// Parse a JSON object of `name → options` into descriptors, in document order
///
/// # Errors
/// Returns [`ConfigError::Json`] on malformed input.
pub fn load_json_table(source: &str) -> Result<Vec<Attribute>, ConfigError> {
    let table: IndexMap<String, AttributeConfig> = serde_json::from_str(source)?;
    Ok(into_attributes(table))
}

fn into_attributes(table: IndexMap<String, AttributeConfig>) -> Vec<Attribute> {
    let attributes: Vec<_> = table
        .into_iter()
        .map(|(name, config)| config.into_attribute(name))
        .collect();
    tracing::debug!(count = attributes.len(), "loaded attribute table");
    attributes
}
