//! Constructable Value Model
//!
//! Dynamic values and type tags for attribute processing.
//!
//! # Core Concepts
//!
//! - [`Value`]: Closed dynamic value (nil, bool, integer, float, string,
//!   symbol, array, map)
//! - [`ValueType`]: Type tag with is-instance-of semantics, including the
//!   abstract `Numeric` and `Any` tags
//!
//! # Example
//!
//! ```rust
//! use constructable_value::{Value, ValueType};
//!
//! let value = Value::from("5");
//! assert!(value.is_instance_of(ValueType::String));
//! assert_eq!(value.to_integer(), 5);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod value;
mod value_type;

// Re-exports
pub use value::Value;
pub use value_type::ValueType;

/// Errors raised when interpreting values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Type name not recognised
    #[error("unknown value type: {0}")]
    UnknownType(String),
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
