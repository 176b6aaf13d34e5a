//! Type tags for instance checks
//!
//! Provides [`ValueType`], the tag an attribute is checked against when it
//! declares a `validate_type`.

use crate::value::Value;
use crate::ValueError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Family of values for is-instance-of checks
///
/// Concrete tags correspond one-to-one with [`Value`] variants. The abstract
/// tags `Numeric` and `Any` match several variants, the same way a superclass
/// matches instances of its subclasses.
///
/// # Examples
/// ```
/// use constructable_value::{Value, ValueType};
///
/// assert!(ValueType::Integer.matches(&Value::Integer(5)));
/// assert!(ValueType::Numeric.matches(&Value::Float(0.5)));
/// assert!(!ValueType::Integer.matches(&Value::from("5")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ValueType {
    /// Explicit null
    Nil,

    /// `true` / `false`
    Bool,

    /// Whole numbers
    Integer,

    /// Floating point numbers
    Float,

    /// Integer or Float
    Numeric,

    /// Text
    String,

    /// Interned identifier
    Symbol,

    /// Ordered list
    Array,

    /// Key/value mapping
    Map,

    /// Matches every value
    Any,
}

impl ValueType {
    /// All tags, concrete first
    pub const ALL: [ValueType; 10] = [
        ValueType::Nil,
        ValueType::Bool,
        ValueType::Integer,
        ValueType::Float,
        ValueType::String,
        ValueType::Symbol,
        ValueType::Array,
        ValueType::Map,
        ValueType::Numeric,
        ValueType::Any,
    ];

    /// Canonical name, as used in error messages
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Bool => "Bool",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Numeric => "Numeric",
            Self::String => "String",
            Self::Symbol => "Symbol",
            Self::Array => "Array",
            Self::Map => "Map",
            Self::Any => "Any",
        }
    }

    /// Check whether `value` is an instance of this type
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Numeric => matches!(value, Value::Integer(_) | Value::Float(_)),
            concrete => value.value_type() == concrete,
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = match s {
            "Nil" | "nil" | "null" => Self::Nil,
            "Bool" | "bool" | "boolean" => Self::Bool,
            "Integer" | "integer" | "int" => Self::Integer,
            "Float" | "float" => Self::Float,
            "Numeric" | "numeric" | "number" => Self::Numeric,
            "String" | "string" => Self::String,
            "Symbol" | "symbol" => Self::Symbol,
            "Array" | "array" => Self::Array,
            "Map" | "map" | "hash" => Self::Map,
            "Any" | "any" => Self::Any,
            other => return Err(ValueError::UnknownType(other.to_string())),
        };
        Ok(found)
    }
}

impl TryFrom<String> for ValueType {
    type Error = ValueError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<ValueType> for String {
    fn from(ty: ValueType) -> Self {
        ty.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_tags_match_only_their_variant() {
        assert!(ValueType::Integer.matches(&Value::Integer(1)));
        assert!(!ValueType::Integer.matches(&Value::Float(1.0)));
        assert!(!ValueType::String.matches(&Value::Symbol("s".into())));
        assert!(ValueType::Nil.matches(&Value::Nil));
    }

    #[test]
    fn numeric_matches_integer_and_float() {
        assert!(ValueType::Numeric.matches(&Value::Integer(3)));
        assert!(ValueType::Numeric.matches(&Value::Float(3.5)));
        assert!(!ValueType::Numeric.matches(&Value::from("3")));
    }

    #[test]
    fn any_matches_everything() {
        assert!(ValueType::Any.matches(&Value::Nil));
        assert!(ValueType::Any.matches(&Value::Array(vec![])));
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(ValueType::Integer.to_string(), "Integer");
        assert_eq!(ValueType::Numeric.to_string(), "Numeric");
    }

    #[test]
    fn from_str_accepts_aliases() {
        assert_eq!("Integer".parse::<ValueType>().unwrap(), ValueType::Integer);
        assert_eq!("int".parse::<ValueType>().unwrap(), ValueType::Integer);
        assert_eq!("hash".parse::<ValueType>().unwrap(), ValueType::Map);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let result = "Widget".parse::<ValueType>();
        assert!(matches!(result, Err(ValueError::UnknownType(name)) if name == "Widget"));
    }

    #[test]
    fn name_round_trips_through_from_str() {
        for tag in ValueType::ALL {
            assert_eq!(tag.name().parse::<ValueType>().unwrap(), tag);
        }
    }

    #[test]
    fn serde_uses_canonical_name_and_aliases() {
        let json = serde_json::to_string(&ValueType::Integer).unwrap();
        assert_eq!(json, "\"Integer\"");

        let parsed: ValueType = serde_json::from_str("\"integer\"").unwrap();
        assert_eq!(parsed, ValueType::Integer);
    }

    #[test]
    fn serde_reports_unknown_type_name() {
        let err = serde_json::from_str::<ValueType>("\"Widget\"").unwrap_err();
        assert!(err.to_string().contains("unknown value type: Widget"));
    }
}
