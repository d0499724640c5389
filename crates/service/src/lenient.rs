//! Field deserializers for records written by older clients or by hand.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// `null` or absent reads as empty; a lone scalar becomes a one-item list.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().filter(|v| !v.is_null()).map(text).collect(),
        other => vec![text(other)],
    })
}

/// `null` reads as empty; non-string scalars keep their JSON text.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        other => text(other),
    })
}

/// Like [`string`] but keeps `null` as `None`.
pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        other => Some(text(other)),
    })
}
