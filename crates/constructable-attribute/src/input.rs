//! Lookup seam over input mappings
//!
//! [`Attribute::process`](crate::Attribute::process) only needs to ask a
//! mapping whether a key is present and what it maps to. [`AttributeInputs`]
//! captures that, so callers can hand over whichever map they already hold.

use constructable_value::Value;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Key/value source an attribute reads its input from
pub trait AttributeInputs {
    /// Value stored under `key`, or `None` when the key is absent
    ///
    /// A key mapped to [`Value::Nil`] is present.
    fn lookup(&self, key: &str) -> Option<&Value>;

    /// Whether `key` is present
    #[inline]
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

impl<K, S> AttributeInputs for HashMap<K, Value, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<K> AttributeInputs for BTreeMap<K, Value>
where
    K: Borrow<str> + Ord,
{
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<K, S> AttributeInputs for IndexMap<K, Value, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Only [`Value::Map`] has keys; every other value is an empty input
impl AttributeInputs for Value {
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }
}

impl<T: AttributeInputs + ?Sized> AttributeInputs for &T {
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        (**self).lookup(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::AttributeName;

    #[test]
    fn hash_map_lookup() {
        let mut inputs = HashMap::new();
        inputs.insert("foo".to_string(), Value::from("bar"));
        assert_eq!(inputs.lookup("foo"), Some(&Value::from("bar")));
        assert!(!inputs.contains("bar"));
    }

    #[test]
    fn btree_map_with_str_keys() {
        let mut inputs = BTreeMap::new();
        inputs.insert("foo", Value::from(1));
        assert!(inputs.contains("foo"));
    }

    #[test]
    fn index_map_with_attribute_name_keys() {
        let mut inputs = IndexMap::new();
        inputs.insert(AttributeName::new("foo"), Value::Nil);
        assert_eq!(inputs.lookup("foo"), Some(&Value::Nil));
    }

    #[test]
    fn non_map_value_is_empty() {
        assert!(Value::from(5).lookup("foo").is_none());
        assert!(Value::Nil.lookup("foo").is_none());
    }

    #[test]
    fn map_value_lookup() {
        let value = Value::from(serde_json::json!({"foo": null}));
        assert!(value.contains("foo"));
    }
}
