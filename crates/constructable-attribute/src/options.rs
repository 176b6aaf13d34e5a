//! Behavior options for one attribute
//!
//! Provides [`AttributeOptions`], the immutable configuration record an
//! [`Attribute`](crate::Attribute) is created with.

use constructable_value::{Value, ValueType};
use std::fmt;
use std::sync::Arc;

/// Validation predicate
///
/// `Ok(false)` rejects the value; `Err` is the predicate's own failure and
/// is passed through to the caller unchanged.
pub type Validator = Arc<dyn Fn(&Value) -> anyhow::Result<bool> + Send + Sync>;

/// Value conversion applied as the last pipeline step
pub type Converter = Arc<dyn Fn(Value) -> anyhow::Result<Value> + Send + Sync>;

/// Options controlling how an attribute is populated and exposed
///
/// Every field is optional; [`AttributeOptions::default`] sets nothing, which
/// gives a private attribute that passes its input through unchanged.
///
/// # Example
/// ```
/// use constructable_attribute::AttributeOptions;
/// use constructable_value::{Value, ValueType};
///
/// let options = AttributeOptions::new()
///     .with_required(true)
///     .with_validate_type(ValueType::Integer)
///     .with_validate(|v| v.as_integer().is_some_and(|n| n < 5))
///     .with_readable(true);
///
/// assert!(options.required());
/// assert!(options.has_validator());
/// ```
#[derive(Clone, Default)]
pub struct AttributeOptions {
    required: bool,
    validate: Option<Validator>,
    validate_type: Option<ValueType>,
    default: Option<Value>,
    converter: Option<Converter>,
    accessible: bool,
    readable: bool,
    writable: bool,
}

impl AttributeOptions {
    /// Options with nothing set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the attribute to be present in the input
    #[inline]
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Reject provided values for which `predicate` returns false
    #[must_use]
    pub fn with_validate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(move |value: &Value| -> anyhow::Result<bool> {
            Ok(predicate(value))
        }));
        self
    }

    /// Fallible form of [`with_validate`](Self::with_validate)
    #[must_use]
    pub fn with_try_validate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(predicate));
        self
    }

    /// Require provided values to be instances of `ty`
    #[inline]
    #[must_use]
    pub fn with_validate_type(mut self, ty: ValueType) -> Self {
        self.validate_type = Some(ty);
        self
    }

    /// Value used when the attribute is absent from the input
    #[inline]
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Convert the resolved value before it is returned
    #[must_use]
    pub fn with_converter<F>(mut self, converter: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.converter = Some(Arc::new(move |value: Value| -> anyhow::Result<Value> {
            Ok(converter(value))
        }));
        self
    }

    /// Fallible form of [`with_converter`](Self::with_converter)
    #[must_use]
    pub fn with_try_converter<F>(mut self, converter: F) -> Self
    where
        F: Fn(Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.converter = Some(Arc::new(converter));
        self
    }

    /// Shorthand for readable and writable
    #[inline]
    #[must_use]
    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }

    /// Expose a reader
    #[inline]
    #[must_use]
    pub fn with_readable(mut self, readable: bool) -> Self {
        self.readable = readable;
        self
    }

    /// Expose a writer
    #[inline]
    #[must_use]
    pub fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    /// Whether the attribute must be present
    #[inline]
    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }

    /// Type provided values must match
    #[inline]
    #[must_use]
    pub fn validate_type(&self) -> Option<ValueType> {
        self.validate_type
    }

    /// Value used when absent
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// True when a validation predicate is set
    #[inline]
    #[must_use]
    pub fn has_validator(&self) -> bool {
        self.validate.is_some()
    }

    /// True when a converter is set
    #[inline]
    #[must_use]
    pub fn has_converter(&self) -> bool {
        self.converter.is_some()
    }

    /// Raw `accessible` flag
    #[inline]
    #[must_use]
    pub fn accessible(&self) -> bool {
        self.accessible
    }

    /// Raw `readable` flag
    #[inline]
    #[must_use]
    pub fn readable(&self) -> bool {
        self.readable
    }

    /// Raw `writable` flag
    #[inline]
    #[must_use]
    pub fn writable(&self) -> bool {
        self.writable
    }

    #[inline]
    pub(crate) fn validator(&self) -> Option<&Validator> {
        self.validate.as_ref()
    }

    #[inline]
    pub(crate) fn converter(&self) -> Option<&Converter> {
        self.converter.as_ref()
    }
}

impl fmt::Debug for AttributeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeOptions")
            .field("required", &self.required)
            .field("validate", &self.validate.as_ref().map(|_| "<fn>"))
            .field("validate_type", &self.validate_type)
            .field("default", &self.default)
            .field("converter", &self.converter.as_ref().map(|_| "<fn>"))
            .field("accessible", &self.accessible)
            .field("readable", &self.readable)
            .field("writable", &self.writable)
            .finish()
    }
}
