//! Nested-field flattening for geospatial property export
//!
//! Produces a flat mapping of dotted-path keys to leaf values, in the
//! insertion order of the source object. Only nested objects are descended
//! into; arrays and scalars are leaves. No sibling key is ever dropped.

use crate::types::{JsonObject, JsonValue};

/// Flatten a nested record into dotted-path keys.
///
/// ```
/// use serde_json::json;
/// let flat = inat_client::convert::flatten(&json!({
///     "id": 1,
///     "taxon": {"name": "Lixus bardanae", "rank": "species"},
/// }));
/// assert_eq!(flat["taxon.name"], json!("Lixus bardanae"));
/// ```
pub fn flatten(item: &JsonValue) -> JsonObject {
    let mut flat = JsonObject::new();
    if let Some(obj) = item.as_object() {
        flatten_into(&mut flat, obj, None);
    }
    flat
}

fn flatten_into(flat: &mut JsonObject, obj: &JsonObject, prefix: Option<&str>) {
    for (key, value) in obj {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            JsonValue::Object(nested) => flatten_into(flat, nested, Some(&path)),
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}
