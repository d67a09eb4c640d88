//! Tolerant field decoders for record payloads.
//!
//! A single malformed optional field (a price sent as `"n/a"`, an unknown
//! species name) must not reject the whole collection; it decodes as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Species;

/// Accepts a JSON number or a numeric string; anything else decodes as `None`.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

/// Accepts a JSON bool or the strings `"true"`/`"false"`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Bool(b) => Some(b),
        Value::String(s) => s.trim().parse::<bool>().ok(),
        _ => None,
    }))
}

/// Decodes a single species, dropping unknown names.
pub(crate) fn species<'de, D>(deserializer: D) -> Result<Option<Species>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok()))
}

/// Decodes a species list, dropping entries that are not known species.
pub(crate) fn species_list<'de, D>(deserializer: D) -> Result<Vec<Species>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|s| s.parse().ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Decodes a string list, dropping non-string entries.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Decodes an RFC 3339 timestamp; malformed strings decode as `None`.
pub(crate) fn timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<chrono::DateTime<chrono::Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&chrono::Utc)))
}
