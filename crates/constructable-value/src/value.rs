//! Dynamic values carried through attribute processing
//!
//! Provides [`Value`], the closed set of shapes an attribute input, default
//! or converted result can take.

use crate::value_type::ValueType;
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt::{self, Display, Formatter};

/// Dynamically typed value
///
/// `Map` keeps insertion order so that values built from configuration
/// render and serialize the way they were written.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null
    #[default]
    Nil,

    /// Boolean
    Bool(bool),

    /// Whole number
    Integer(i64),

    /// Floating point number
    Float(f64),

    /// Text
    String(String),

    /// Interned identifier, rendered as `:name`
    Symbol(String),

    /// Ordered list
    Array(Vec<Value>),

    /// Insertion-ordered mapping
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Create a symbol value
    #[inline]
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Concrete type tag of this value
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Nil => ValueType::Nil,
            Self::Bool(_) => ValueType::Bool,
            Self::Integer(_) => ValueType::Integer,
            Self::Float(_) => ValueType::Float,
            Self::String(_) => ValueType::String,
            Self::Symbol(_) => ValueType::Symbol,
            Self::Array(_) => ValueType::Array,
            Self::Map(_) => ValueType::Map,
        }
    }

    /// Is-instance-of check against a type tag
    #[inline]
    #[must_use]
    pub fn is_instance_of(&self, ty: ValueType) -> bool {
        ty.matches(self)
    }

    /// True for [`Value::Nil`]
    #[inline]
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Text of a string or symbol
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload, without coercion
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Float view; integers widen
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Boolean payload
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Items of an array
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Entries of a map
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Lenient integer coercion
    ///
    /// Integers pass through and floats truncate toward zero. Strings and
    /// symbols yield their leading optional sign and digits after trimming
    /// whitespace (`" 42abc"` → 42). Anything unparsable yields 0.
    #[must_use]
    pub fn to_integer(&self) -> i64 {
        match self {
            Self::Integer(i) => *i,
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(f) => *f as i64,
            Self::String(s) | Self::Symbol(s) => leading_integer(s),
            _ => 0,
        }
    }
}

fn leading_integer(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    format!("{sign}{digits}").parse().unwrap_or(0)
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => f.write_str(s),
            Self::Symbol(s) => write!(f, ":{s}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Nil, Into::into)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) | Self::Symbol(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map {
                    out.serialize_entry(key, item)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("any self-describing value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Integer(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Integer))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, item)) = access.next_entry::<String, Value>()? {
            map.insert(key, item);
        }
        Ok(Value::Map(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn value_type_of_each_variant() {
        assert_eq!(Value::Nil.value_type(), ValueType::Nil);
        assert_eq!(Value::from(true).value_type(), ValueType::Bool);
        assert_eq!(Value::from(1).value_type(), ValueType::Integer);
        assert_eq!(Value::from(1.5).value_type(), ValueType::Float);
        assert_eq!(Value::from("s").value_type(), ValueType::String);
        assert_eq!(Value::symbol("s").value_type(), ValueType::Symbol);
        assert_eq!(Value::from(vec![1, 2]).value_type(), ValueType::Array);
        assert_eq!(Value::Map(IndexMap::new()).value_type(), ValueType::Map);
    }

    #[test]
    fn to_integer_is_lenient() {
        assert_eq!(Value::from("5").to_integer(), 5);
        assert_eq!(Value::from("  -12abc").to_integer(), -12);
        assert_eq!(Value::from("+7").to_integer(), 7);
        assert_eq!(Value::from("abc").to_integer(), 0);
        assert_eq!(Value::from("").to_integer(), 0);
        assert_eq!(Value::from(3.9).to_integer(), 3);
        assert_eq!(Value::from(-3.9).to_integer(), -3);
        assert_eq!(Value::Nil.to_integer(), 0);
        assert_eq!(Value::from(42).to_integer(), 42);
    }

    #[test]
    fn to_integer_overflow_yields_zero() {
        assert_eq!(Value::from("99999999999999999999").to_integer(), 0);
    }

    #[test]
    fn display_renders_symbols_with_colon() {
        assert_eq!(Value::symbol("bar").to_string(), ":bar");
        assert_eq!(Value::from("bar").to_string(), "bar");
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::from(1.0).to_string(), "1.0");
    }

    #[test]
    fn display_nested() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), Value::from(vec![1, 2]));
        map.insert("b".to_string(), Value::symbol("x"));
        assert_eq!(Value::Map(map).to_string(), "{a: [1, 2], b: :x}");
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Nil);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn from_json_value() {
        let json = serde_json::json!({"n": 5, "f": 1.5, "s": "x", "l": [true, null]});
        let value = Value::from(json);
        let map = value.as_map().unwrap();

        assert_eq!(map["n"], Value::Integer(5));
        assert_eq!(map["f"], Value::Float(1.5));
        assert_eq!(map["s"], Value::from("x"));
        assert_eq!(map["l"], Value::Array(vec![Value::Bool(true), Value::Nil]));
    }

    #[test]
    fn deserialize_keeps_map_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2}"#).unwrap();
        let keys: Vec<_> = value.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z".to_string(), "a".to_string()]);
    }

    #[test]
    fn symbol_serializes_as_string() {
        let json = serde_json::to_string(&Value::symbol("bar")).unwrap();
        assert_eq!(json, "\"bar\"");
    }

    #[test]
    fn as_str_covers_symbols() {
        assert_eq!(Value::symbol("k").as_str(), Some("k"));
        assert_eq!(Value::from(1).as_str(), None);
    }
}
