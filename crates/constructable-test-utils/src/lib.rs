//! Testing utilities for the Constructable workspace
//!
//! Shared test helpers, fixtures, and call counters.

#![allow(missing_docs)]

use constructable_attribute::{Attribute, AttributeOptions};
use constructable_value::{Value, ValueType};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub type Inputs = IndexMap<String, Value>;

/// Install a test-writer subscriber once; `RUST_LOG` controls verbosity
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn inputs<K, V, I>(pairs: I) -> Inputs
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

pub fn empty_inputs() -> Inputs {
    Inputs::new()
}

/// Counts how many times a callback ran
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Validator that records each call and returns `verdict`
    pub fn validator(&self, verdict: bool) -> impl Fn(&Value) -> bool + Send + Sync + 'static {
        let counter = self.clone();
        move |_: &Value| {
            counter.hit();
            verdict
        }
    }

    /// Converter that records each call and wraps the value in a one-element array
    pub fn converter(&self) -> impl Fn(Value) -> Value + Send + Sync + 'static {
        let counter = self.clone();
        move |value: Value| {
            counter.hit();
            Value::Array(vec![value])
        }
    }
}

pub fn less_than(limit: i64) -> impl Fn(&Value) -> bool + Send + Sync + 'static {
    move |value: &Value| value.as_integer().is_some_and(|n| n < limit)
}

pub fn to_integer(value: Value) -> Value {
    Value::Integer(value.to_integer())
}

/// Descriptor with every pipeline step configured
pub fn fully_configured(name: &str) -> Attribute {
    Attribute::new(
        name,
        AttributeOptions::new()
            .with_validate(less_than(100))
            .with_validate_type(ValueType::Integer)
            .with_default(10)
            .with_converter(|v| Value::Integer(v.to_integer() * 2))
            .with_readable(true),
    )
}
