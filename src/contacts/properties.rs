//! Property mapping helpers for the contacts wire format.
//!
//! The contacts API uses two shapes for the same data. On write, properties
//! are a list of `{"property": name, "value": value}` objects. On read, a
//! profile carries `{name: {"value": value, "versions": [...]}}`; the
//! versions history is discarded and values are flattened to plain values.

use serde_json::{Map, Value};

/// Serializes a flat property mapping into the API's write shape.
///
/// # Example
///
/// ```rust
/// use hubspot_contacts::contacts::to_property_list;
/// use serde_json::{json, Map};
///
/// let mut properties = Map::new();
/// properties.insert("firstname".to_string(), json!("Leslie"));
///
/// assert_eq!(
///     to_property_list(&properties),
///     json!([{"property": "firstname", "value": "Leslie"}]),
/// );
/// ```
#[must_use]
pub fn to_property_list(properties: &Map<String, Value>) -> Value {
    let list: Vec<Value> = properties
        .iter()
        .map(|(name, value)| {
            let mut entry = Map::new();
            entry.insert("property".to_string(), Value::String(name.clone()));
            entry.insert("value".to_string(), value.clone());
            Value::Object(entry)
        })
        .collect();
    Value::Array(list)
}

/// Flattens the API's read shape into a plain property mapping.
///
/// Nested `{"value": ..., "versions": [...]}` entries are reduced to their
/// value; plain values are kept as-is; a non-object input yields an empty
/// mapping. Insertion order is preserved.
#[must_use]
pub fn flatten_properties(raw: &Value) -> Map<String, Value> {
    let Some(object) = raw.as_object() else {
        return Map::new();
    };

    object
        .iter()
        .map(|(name, entry)| {
            let value = entry
                .as_object()
                .and_then(|nested| nested.get("value"))
                .unwrap_or(entry);
            (name.clone(), value.clone())
        })
        .collect()
}
