//! Dynamic values accepted by [`Schema::validate`](crate::Schema::validate).
//!
//! [`Value`] is the "unknown" side of the library: whatever arrives from the
//! outside world before a schema has looked at it. Each value reports a
//! runtime category through [`Value::type_of`], using the same categories as
//! JavaScript's `typeof` operator. That is why `null`, arrays and dates all
//! report [`JsType::Object`].
//!
//! # Example
//!
//! ```rust
//! use schemata::{JsType, Value};
//!
//! assert_eq!(Value::from("hello").type_of(), JsType::String);
//! assert_eq!(Value::from(vec![1, 2, 3]).type_of(), JsType::Object);
//! assert_eq!(Value::Null.type_of().as_str(), "object");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::error::SchemaResult;

/// Runtime category of a [`Value`], as reported by `typeof`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsType {
    /// `"undefined"`
    Undefined,
    /// `"object"` (also covers `null`, arrays and dates)
    Object,
    /// `"boolean"`
    Boolean,
    /// `"number"`
    Number,
    /// `"bigint"`
    BigInt,
    /// `"string"`
    String,
}

impl JsType {
    /// Returns the string `typeof` would produce.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Object => "object",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::String => "string",
        }
    }
}

impl fmt::Display for JsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An untyped input value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit null marker.
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the runtime category of this value.
    pub fn type_of(&self) -> JsType {
        match self {
            Self::Undefined => JsType::Undefined,
            Self::Bool(_) => JsType::Boolean,
            Self::Number(_) => JsType::Number,
            Self::BigInt(_) => JsType::BigInt,
            Self::String(_) => JsType::String,
            Self::Null | Self::Date(_) | Self::Array(_) | Self::Object(_) => JsType::Object,
        }
    }

    /// Decode a JSON document into a value.
    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Ok(parsed.into())
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a property of an object value.
    ///
    /// Returns `None` for non-objects and missing keys alike.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // JSON has no undefined; it collapses onto null
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::BigInt(n) => serializer.serialize_i128(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Date(date) => date.serialize(serializer),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(map) => map.serialize(serializer),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Object(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            Json::Object(map) => Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}
