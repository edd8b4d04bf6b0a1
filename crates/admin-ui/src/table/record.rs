//! Field access over a record's serde representation
//!
//! Records are serialized once per render into a [`serde_json::Value`].
//! Column keys are dot paths (`data.type`, `address.city`) resolved against
//! that value; a missing segment at any depth resolves to `None`.

use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

/// Serialize a record for field access. Unserializable records become `null`.
pub fn record_value<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

/// Resolve a dot path. `null` leaves are treated as absent.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    match current {
        Value::Null => None,
        other => Some(other),
    }
}

/// Text shown in a cell and matched by search.
///
/// Follows the browser's string conversion: whole floats drop their
/// fraction (`8500.0` reads `8500`) and arrays join with a bare `,`.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => float.to_string(),
            _ => number.to_string(),
        },
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Search text of one field; `null` reads as `"null"`
fn search_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => display_value(other),
    }
}

/// Whether any top-level scalar, array or `null` field contains `needle`.
///
/// `needle` must already be lower-cased. Nested objects are not searched.
pub fn matches_query(record: &Value, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let contains = |value: &Value| search_text(value).to_lowercase().contains(needle);
    match record {
        Value::Object(map) => map
            .values()
            .any(|value| !matches!(value, Value::Object(_)) && contains(value)),
        Value::Null => false,
        other => contains(other),
    }
}

/// Type-aware ordering of two present values.
///
/// Numbers compare numerically, booleans `false < true` and strings by
/// code point. Mixed or structured values fall back to comparing their
/// display text.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => display_value(a).cmp(&display_value(b)),
    }
}
