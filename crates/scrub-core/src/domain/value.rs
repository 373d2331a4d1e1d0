//! Dynamic value model: [`Value`] and [`Record`].
//!
//! Input documents have arbitrary shape, so the cleaner operates over a
//! tagged union rather than caller types. Typed callers go through serde:
//! [`Value::from_serializable`] on the way in and [`Value::deserialize_into`]
//! on the way out. Full type preservation across arbitrary nesting is not
//! possible without one of those round-trips.
//!
//! `Value::Undefined` models a key that is present but holds no value. It is
//! omitted when an object is serialized and written as `null` inside arrays,
//! the same way JSON serializers treat absent values.

use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::DeserializeOwned,
    ser::{SerializeMap, SerializeSeq},
};

use crate::domain::error::DomainError;

// ── Value ─────────────────────────────────────────────────────────────────────

/// A node in a JSON-shaped document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Present key, absent value.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<Value>),
    Object(Record),
}

impl Value {
    /// Short name of the variant, used in error messages and logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// `true` for `""` and `[]`. Empty objects are not "empty" here; they are
    /// pruned by the recursive step instead.
    pub fn is_empty_text_or_array(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Self::Object(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_object(self) -> Result<Record, DomainError> {
        match self {
            Self::Object(record) => Ok(record),
            other => Err(DomainError::UnexpectedShape {
                expected: "an object",
                found: other.kind(),
            }),
        }
    }

    pub fn into_array(self) -> Result<Vec<Value>, DomainError> {
        match self {
            Self::Array(items) => Ok(items),
            other => Err(DomainError::UnexpectedShape {
                expected: "an array",
                found: other.kind(),
            }),
        }
    }

    /// Convert to a `serde_json::Value`, dropping undefined object entries.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Undefined | Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => serde_json::Value::Number(n.clone()),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Array(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Object(record) => serde_json::Value::Object(record.to_json_map()),
        }
    }

    /// Compact JSON text. Key order follows insertion order, so two records
    /// with the same entries in a different order produce different text.
    pub fn canonical_json(&self) -> String {
        self.to_json().to_string()
    }

    /// Lift any serializable type into the value model.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, DomainError> {
        serde_json::to_value(value)
            .map(Self::from)
            .map_err(|e| DomainError::Unrepresentable(e.to_string()))
    }

    /// Re-parse a (usually cleaned) value into a concrete type.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T, DomainError> {
        serde_json::from_value(self.to_json())
            .map_err(|e| DomainError::Unrepresentable(e.to_string()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON form and become `Null`.
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Object(record)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(record) => record.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

// ── Record ────────────────────────────────────────────────────────────────────

/// Ordered string-keyed mapping; iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    entries: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert or replace; a replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.entries
            .iter()
            .filter(|(_, v)| !v.is_undefined())
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let defined = self.entries.values().filter(|v| !v.is_undefined()).count();
        let mut map = serializer.serialize_map(Some(defined))?;
        for (key, value) in self.entries.iter().filter(|(_, v)| !v.is_undefined()) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer)?
            .into_object()
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::Object(self.to_json_map()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_preserves_key_order() {
        let value = Value::from(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<_> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn undefined_entries_are_omitted_from_json() {
        let record = Record::new().with("a", 1_i64).with("b", Value::Undefined);
        assert_eq!(record.to_string(), r#"{"a":1}"#);
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn undefined_inside_array_serializes_as_null() {
        let value = Value::Array(vec![Value::Undefined, 1_i64.into()]);
        assert_eq!(value.canonical_json(), "[null,1]");
    }

    #[test]
    fn canonical_json_is_order_sensitive() {
        let ab = Value::from(json!({"a": 1, "b": 2}));
        let ba = Value::from(json!({"b": 2, "a": 1}));
        assert_ne!(ab.canonical_json(), ba.canonical_json());
    }

    #[test]
    fn empty_text_or_array_detection() {
        assert!(Value::from("").is_empty_text_or_array());
        assert!(Value::Array(vec![]).is_empty_text_or_array());
        assert!(!Value::Object(Record::new()).is_empty_text_or_array());
        assert!(!Value::Null.is_empty_text_or_array());
        assert!(!Value::from(0_i64).is_empty_text_or_array());
    }

    #[test]
    fn non_finite_float_becomes_null() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
    }

    #[test]
    fn into_object_rejects_arrays() {
        let err = Value::Array(vec![]).into_object().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnexpectedShape {
                expected: "an object",
                found: "array"
            }
        );
    }

    #[test]
    fn typed_round_trip() {
        #[derive(Debug, PartialEq, Serialize, serde::Deserialize)]
        struct User {
            name: String,
            #[serde(default)]
            nickname: Option<String>,
        }

        let value = Value::from_serializable(&User {
            name: "x".into(),
            nickname: None,
        })
        .unwrap();
        let back: User = value.deserialize_into().unwrap();
        assert_eq!(back.name, "x");
        assert_eq!(back.nickname, None);
    }

    #[test]
    fn record_remove_keeps_order() {
        let mut record: Record = [("a", 1_i64), ("b", 2), ("c", 3)].into_iter().collect();
        record.remove("b");
        assert_eq!(record.keys().collect::<Vec<_>>(), ["a", "c"]);
    }
}
