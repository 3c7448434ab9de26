//! Connection parameters supplied by the caller.

use crate::error::{ConnectorError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reserved key that selects the concrete provider.
///
/// The request layer reads it to route a mapping to a provider type. It is
/// never part of any provider's parameter schema and is never reported as
/// an invalid parameter.
pub const PROVIDER_KEY: &str = "provider";

/// Immutable, ordered mapping of parameter names to values.
///
/// Keys keep the order in which the caller supplied them, which makes
/// validation messages deterministic. Values are strings; numbers and
/// booleans coming from JSON are stored as their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters(IndexMap<String, String>);

impl Parameters {
    /// Creates an empty parameter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds parameters from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::UnsupportedValue`] when a value is an array,
    /// object or `null`, or when `value` itself is not an object.
    pub fn from_json_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| {
                    let value = primitive_to_string(&key, value)?;
                    Ok((key, value))
                })
                .collect::<Result<IndexMap<_, _>>>()
                .map(Self),
            other => Err(ConnectorError::UnsupportedValue {
                key: String::new(),
                kind: json_kind(&other),
            }),
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value for a parameter a provider cannot work without.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::InvalidParameters`] worded like the
    /// validation message for a single missing parameter.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| {
            ConnectorError::InvalidParameters(format!("Missing required parameters {key}"))
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Parameter names in the order they were supplied.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The routing discriminator, if the caller left it in the mapping.
    pub fn provider(&self) -> Option<&str> {
        self.get(PROVIDER_KEY)
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Parameters {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, value)| {
                let value = primitive_to_string(&key, value)?;
                Ok((key, value))
            })
            .collect::<Result<IndexMap<_, _>>>()
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

fn primitive_to_string(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ConnectorError::UnsupportedValue {
            key: key.to_string(),
            kind: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
