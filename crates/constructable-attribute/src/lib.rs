//! Constructable Attribute Descriptors
//!
//! Describes how one named field of a constructed object is populated,
//! validated, defaulted, converted and exposed.
//!
//! # Core Concepts
//!
//! - [`Attribute`]: Descriptor for one named attribute, with `process` and
//!   `permissions`
//! - [`AttributeOptions`]: Immutable behavior options (required, validate,
//!   validate_type, default, converter, accessible/readable/writable)
//! - [`AttributeInputs`]: Lookup seam over input mappings
//! - [`Permission`]: Reader / writer accessors derived from options
//! - [`AttributeConfig`]: Declarative, serializable options
//!
//! # Example
//!
//! ```rust
//! use constructable_attribute::{Attribute, AttributeError, AttributeOptions};
//! use constructable_value::{Value, ValueType};
//! use std::collections::HashMap;
//!
//! let age = Attribute::new(
//!     "age",
//!     AttributeOptions::new()
//!         .with_required(true)
//!         .with_validate_type(ValueType::Integer),
//! );
//!
//! let inputs = HashMap::from([("age", Value::from(42))]);
//! assert_eq!(age.process(&inputs).unwrap(), Some(Value::from(42)));
//!
//! let empty: HashMap<String, Value> = HashMap::new();
//! let err = age.process(&empty).unwrap_err();
//! assert!(matches!(err, AttributeError::RequiredAttributeMissing { .. }));
//! assert_eq!(err.to_string(), ":age is a required attribute");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod attribute;
mod config;
mod error;
mod input;
mod name;
mod options;
mod permission;

// Re-exports
pub use attribute::Attribute;
pub use config::{load_json_table, load_toml_table, AttributeConfig};
pub use error::{AttributeError, ConfigError};
pub use input::AttributeInputs;
pub use name::{AttributeName, STORAGE_SIGIL};
pub use options::{AttributeOptions, Converter, Validator};
pub use permission::Permission;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for attribute processing
    pub use crate::{
        Attribute, AttributeConfig, AttributeError, AttributeInputs, AttributeName,
        AttributeOptions, Permission,
    };
    pub use constructable_value::{Value, ValueType};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
