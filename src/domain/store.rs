//! Open key-value payload bags attached to users, channels, conversations and
//! transactions.
//!
//! Values are a closed tagged union so that integers, floats, strings, arrays
//! and nested maps survive a trip through JSON without coercion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single value inside a [`DataStore`].
///
/// Serialized untagged: each variant maps onto exactly one JSON value type.
/// `Integer` and `Unsigned` are tried before `Float`, so `3` stays an integer,
/// `3.0` stays a float and integers above `i64::MAX` are not rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    Null,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    String(String),
    Array(Vec<StoreValue>),
    Map(BTreeMap<String, StoreValue>),
}

impl StoreValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoreValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, StoreValue::Null)
    }
}

impl From<&str> for StoreValue {
    fn from(s: &str) -> Self {
        StoreValue::String(s.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(s: String) -> Self {
        StoreValue::String(s)
    }
}

impl From<bool> for StoreValue {
    fn from(b: bool) -> Self {
        StoreValue::Bool(b)
    }
}

impl From<i64> for StoreValue {
    fn from(n: i64) -> Self {
        StoreValue::Integer(n)
    }
}

impl From<u64> for StoreValue {
    fn from(n: u64) -> Self {
        i64::try_from(n)
            .map(StoreValue::Integer)
            .unwrap_or(StoreValue::Unsigned(n))
    }
}

impl From<f64> for StoreValue {
    fn from(n: f64) -> Self {
        StoreValue::Float(n)
    }
}

impl From<serde_json::Value> for StoreValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => StoreValue::Null,
            serde_json::Value::Bool(b) => StoreValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    StoreValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    StoreValue::Unsigned(u)
                } else {
                    StoreValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => StoreValue::String(s),
            serde_json::Value::Array(items) => {
                StoreValue::Array(items.into_iter().map(StoreValue::from).collect())
            }
            serde_json::Value::Object(map) => StoreValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, StoreValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<StoreValue> for serde_json::Value {
    fn from(v: StoreValue) -> Self {
        match v {
            StoreValue::Null => serde_json::Value::Null,
            StoreValue::Bool(b) => serde_json::Value::Bool(b),
            StoreValue::Integer(i) => serde_json::Value::from(i),
            StoreValue::Unsigned(u) => serde_json::Value::from(u),
            // NaN and infinities have no JSON form and become null.
            StoreValue::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            StoreValue::String(s) => serde_json::Value::String(s),
            StoreValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            StoreValue::Map(map) => {
                serde_json::Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// Schema-less string-keyed bag. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataStore(BTreeMap<String, StoreValue>);

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&StoreValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StoreValue>) -> Option<StoreValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<StoreValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StoreValue)> {
        self.0.iter()
    }

    /// Moves every entry of `other` into `self`, overwriting existing keys.
    pub fn extend(&mut self, other: DataStore) {
        self.0.extend(other.0);
    }
}

impl<K: Into<String>, V: Into<StoreValue>> FromIterator<(K, V)> for DataStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for DataStore {
    type Item = (String, StoreValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, StoreValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub type UserStore = DataStore;
pub type ChannelStore = DataStore;
pub type ConversationStore = DataStore;
pub type ChannelMarkup = DataStore;
pub type TransactionModel = DataStore;
