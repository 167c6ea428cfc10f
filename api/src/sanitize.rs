//! Ingress sanitization.
//!
//! Request bodies are cleaned once, before they are deserialized into typed
//! payloads: object keys that look like query operators (`$gt`, `$where`,
//! ...) are dropped at every depth. Strings bound for storage additionally go
//! through [`clean_text`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Recursively removes every object key starting with `$`.
pub fn strip_operator_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| !key.starts_with('$'))
                .map(|(key, v)| (key, strip_operator_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_operator_keys).collect()),
        other => other,
    }
}

/// Drops control characters, keeping line breaks and tabs.
pub fn clean_text(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect()
}

/// Deserializes a text field that must never be anything but a scalar.
///
/// Strings pass through, numbers are rendered to text, and objects, arrays,
/// booleans or `null` collapse to an empty string so that validation
/// rejects them instead of letting structured input reach the model layer.
pub fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
