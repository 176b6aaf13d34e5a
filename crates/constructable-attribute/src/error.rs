//! Error types for attribute processing and configuration
//!
//! Provides error handling for:
//! - Missing required attributes
//! - Failed validation predicates
//! - Type tag mismatches
//! - Failures raised by caller-supplied callbacks
//! - Malformed declarative configuration

use crate::name::AttributeName;
use constructable_value::ValueType;

/// Failure of [`Attribute::process`](crate::Attribute::process)
///
/// The first three variants are input errors: the mapping handed to
/// `process` does not satisfy the descriptor. Their messages are stable.
/// `Callback` carries an error produced by a caller-supplied validator or
/// converter, unchanged.
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    /// Attribute is required but absent from the input
    #[error(":{name} is a required attribute")]
    RequiredAttributeMissing {
        /// Affected attribute
        name: AttributeName,
    },

    /// Validation predicate rejected the provided value
    #[error(":{name} did not pass validation")]
    ValidationFailed {
        /// Affected attribute
        name: AttributeName,
    },

    /// Provided value is not an instance of the declared type
    #[error(":{name} is not of validate_type {expected}")]
    TypeMismatch {
        /// Affected attribute
        name: AttributeName,
        /// Declared type
        expected: ValueType,
        /// Type of the provided value
        actual: ValueType,
    },

    /// Error raised inside a validator or converter
    #[error(transparent)]
    Callback(#[from] anyhow::Error),
}

impl AttributeError {
    /// True for errors caused by the input mapping
    #[inline]
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Callback(_))
    }

    /// Attribute the input error refers to
    #[must_use]
    pub fn attribute_name(&self) -> Option<&AttributeName> {
        match self {
            Self::RequiredAttributeMissing { name }
            | Self::ValidationFailed { name }
            | Self::TypeMismatch { name, .. } => Some(name),
            Self::Callback(_) => None,
        }
    }
}

/// Failure to load declarative attribute configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed TOML
    #[error("invalid TOML attribute config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed JSON
    #[error("invalid JSON attribute config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn foo() -> AttributeName {
        AttributeName::new("foo")
    }

    #[test]
    fn input_error_messages() {
        let missing = AttributeError::RequiredAttributeMissing { name: foo() };
        assert_eq!(missing.to_string(), ":foo is a required attribute");

        let invalid = AttributeError::ValidationFailed { name: foo() };
        assert_eq!(invalid.to_string(), ":foo did not pass validation");

        let mismatch = AttributeError::TypeMismatch {
            name: foo(),
            expected: ValueType::Integer,
            actual: ValueType::String,
        };
        assert_eq!(mismatch.to_string(), ":foo is not of validate_type Integer");
    }

    #[test]
    fn callback_error_is_transparent() {
        let err = AttributeError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "boom");
        assert!(!err.is_input_error());
        assert!(err.attribute_name().is_none());
    }

    #[test]
    fn callback_error_keeps_source_chain() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let err = AttributeError::from(anyhow::Error::new(inner).context("reading"));
        assert_eq!(err.to_string(), "reading");
        assert_eq!(err.source().map(ToString::to_string), Some("disk".to_string()));
    }

    #[test]
    fn attribute_name_for_input_errors() {
        let err = AttributeError::ValidationFailed { name: foo() };
        assert!(err.is_input_error());
        assert_eq!(err.attribute_name(), Some(&foo()));
    }
}
