//! Input value model.
//!
//! [`Value`] is the crate's view of structured input data: the JSON scalar
//! and container kinds plus a native date/time variant that JSON cannot
//! express. Schemas validate borrowed `Value` trees and never mutate them.
//!
//! Integers, floats and booleans are distinct variants. That distinction is
//! load-bearing: the number validator's integer-only rule accepts [`Value::Int`]
//! and rejects [`Value::Float`] regardless of magnitude, and a boolean can
//! never satisfy a number check.
//!
//! # Examples
//!
//! ```
//! use tessera_validator::{Value, ValueKind};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"name": "Ada", "tags": ["math", "logic"]}));
//! assert_eq!(value.kind(), ValueKind::Object);
//! ```

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;

// ============================================================================
// VALUE
// ============================================================================

/// A structured input value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null, or an absent field fetched from an object.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer number (i64).
    Int(i64),
    /// Floating point number (f64).
    Float(f64),
    /// UTF-8 text.
    Text(String),
    /// Native date/time value.
    DateTime(NaiveDateTime),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Key-value mapping; insertion order of keys is preserved.
    Object(IndexMap<String, Value>),
}

impl Value {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Whether this value is the absence sentinel.
    ///
    /// `0`, `false` and `""` are present values; only `Null` is absent.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrows the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Fetches an object field by name.
    ///
    /// Returns `None` for missing keys and for non-object values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Lightweight classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    DateTime,
    Array,
    Object,
}

impl ValueKind {
    /// Whether this kind is numeric.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Float)
    }

    /// Whether this kind is a container.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "string",
            ValueKind::DateTime => "datetime",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::DateTime(value.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
