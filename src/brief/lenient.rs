//! Lenient field readers
//!
//! Model output is weakly typed. These `deserialize_with` helpers read any
//! shape and fall back to an empty value instead of failing the whole brief.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Read a string; any other shape reads as empty
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Read a list of strings; numbers are stringified, other entries dropped
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Read a list of records, skipping entries that do not decode
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!(index, error = %e, "Skipping malformed record");
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::debug!("Expected a list, found {}", shape_name(&other));
            Vec::new()
        }
    })
}

/// Read an optional number; numeric strings are accepted
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An enum-valued field: the label as received plus its parsed variant.
///
/// `kind` is `None` when the label is absent or not in the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<T> {
    pub raw: String,
    pub kind: Option<T>,
}

impl<T: FromStr> Tag<T> {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = raw.trim().parse().ok();
        Self { raw, kind }
    }

    /// The received label, or `fallback` when it was empty
    pub fn label_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.raw.trim().is_empty() {
            fallback
        } else {
            &self.raw
        }
    }
}

impl<T> Default for Tag<T> {
    fn default() -> Self {
        Self {
            raw: String::new(),
            kind: None,
        }
    }
}

impl<T> fmt::Display for Tag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Tag<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Tag::parse(string(deserializer)?))
    }
}

impl<T> Serialize for Tag<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}
