//! Attribute descriptor and its processing pipeline
//!
//! Provides [`Attribute`], which turns one entry of an input mapping into a
//! final value.
//!
//! # Pipeline
//! 1. Presence check (`required`)
//! 2. Validation predicate (present values only)
//! 3. Type check (present values only)
//! 4. Resolution: provided value, else `default`, else `None`
//! 5. Conversion of the resolved value
//!
//! Defaults are never validated, and converted values are never
//! re-validated.

use crate::config::AttributeConfig;
use crate::error::AttributeError;
use crate::input::AttributeInputs;
use crate::name::AttributeName;
use crate::options::AttributeOptions;
use crate::permission::Permission;
use constructable_value::Value;
use indexmap::IndexMap;

/// Descriptor for one named attribute
///
/// Immutable after construction. `process` can be called any number of
/// times, from any number of threads, with different inputs.
///
/// # Example
/// ```
/// use constructable_attribute::{Attribute, AttributeOptions};
/// use constructable_value::Value;
/// use std::collections::HashMap;
///
/// let attribute = Attribute::new(
///     "number",
///     AttributeOptions::new().with_converter(|v| Value::Integer(v.to_integer())),
/// );
///
/// let inputs = HashMap::from([("number", Value::from("5"))]);
/// assert_eq!(attribute.process(&inputs).unwrap(), Some(Value::Integer(5)));
/// ```
#[derive(Debug, Clone)]
pub struct Attribute {
    name: AttributeName,
    options: AttributeOptions,
}

impl Attribute {
    /// Create a descriptor
    #[must_use]
    pub fn new(name: impl Into<AttributeName>, options: AttributeOptions) -> Self {
        let name = name.into();
        tracing::debug!(
            attribute = %name,
            required = options.required(),
            validate_type = ?options.validate_type(),
            has_default = options.default_value().is_some(),
            "attribute descriptor created"
        );
        Self { name, options }
    }

    /// Create a descriptor with no options
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<AttributeName>) -> Self {
        Self::new(name, AttributeOptions::default())
    }

    /// Attribute name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &AttributeName {
        &self.name
    }

    /// Options the descriptor was created with
    #[inline]
    #[must_use]
    pub fn options(&self) -> &AttributeOptions {
        &self.options
    }

    /// Key the resolved value is stored under (`foo` → `@foo`)
    #[inline]
    #[must_use]
    pub fn storage_key(&self) -> String {
        self.name.storage_key()
    }

    /// Resolve this attribute's value from `inputs`
    ///
    /// # Returns
    /// - `Ok(Some(value))` for a provided or defaulted value, after conversion
    /// - `Ok(None)` if the attribute is absent, optional and has no default
    ///
    /// # Errors
    /// - [`AttributeError::RequiredAttributeMissing`] if required and absent
    /// - [`AttributeError::ValidationFailed`] if the predicate rejects the value
    /// - [`AttributeError::TypeMismatch`] if the value is not of `validate_type`
    /// - [`AttributeError::Callback`] if a validator or converter fails
    pub fn process<I>(&self, inputs: &I) -> Result<Option<Value>, AttributeError>
    where
        I: AttributeInputs + ?Sized,
    {
        let resolved = match inputs.lookup(self.name.as_str()) {
            Some(provided) => {
                self.check(provided)?;
                tracing::trace!(attribute = %self.name, "using provided value");
                Some(provided.clone())
            }
            None if self.options.required() => {
                return Err(AttributeError::RequiredAttributeMissing {
                    name: self.name.clone(),
                });
            }
            None => {
                tracing::trace!(
                    attribute = %self.name,
                    defaulted = self.options.default_value().is_some(),
                    "attribute absent"
                );
                self.options.default_value().cloned()
            }
        };

        match (resolved, self.options.converter()) {
            (Some(value), Some(convert)) => {
                let converted = convert(value)?;
                tracing::trace!(attribute = %self.name, "converted value");
                Ok(Some(converted))
            }
            (resolved, _) => Ok(resolved),
        }
    }

    /// [`process`](Self::process) over a JSON object
    ///
    /// Only this attribute's entry is converted. Anything other than an
    /// object is treated as an empty input.
    ///
    /// # Errors
    /// Same as [`process`](Self::process).
    pub fn process_json(&self, inputs: &serde_json::Value) -> Result<Option<Value>, AttributeError> {
        let mut entry = IndexMap::with_capacity(1);
        if let Some(provided) = inputs.as_object().and_then(|map| map.get(self.name.as_str())) {
            entry.insert(self.name.as_str(), Value::from(provided.clone()));
        }
        self.process(&entry)
    }

    /// Validator, then type check, on a provided value
    fn check(&self, provided: &Value) -> Result<(), AttributeError> {
        if let Some(validate) = self.options.validator() {
            if !validate(provided)? {
                return Err(AttributeError::ValidationFailed {
                    name: self.name.clone(),
                });
            }
        }

        if let Some(expected) = self.options.validate_type() {
            if !expected.matches(provided) {
                return Err(AttributeError::TypeMismatch {
                    name: self.name.clone(),
                    expected,
                    actual: provided.value_type(),
                });
            }
        }

        Ok(())
    }

    /// Accessors to expose, reader before writer
    ///
    /// Empty unless `accessible`, `readable` or `writable` is set.
    #[must_use]
    pub fn permissions(&self) -> Vec<Permission> {
        if self.options.accessible() {
            return vec![Permission::Reader, Permission::Writer];
        }

        let mut permissions = Vec::with_capacity(2);
        if self.options.readable() {
            permissions.push(Permission::Reader);
        }
        if self.options.writable() {
            permissions.push(Permission::Writer);
        }
        permissions
    }

    /// True when a reader is exposed
    #[inline]
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.permissions().contains(&Permission::Reader)
    }

    /// True when a writer is exposed
    #[inline]
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.permissions().contains(&Permission::Writer)
    }

    /// Declarative part of the options; callbacks are not representable
    #[must_use]
    pub fn to_config(&self) -> AttributeConfig {
        AttributeConfig::from_options(&self.options)
    }
}
