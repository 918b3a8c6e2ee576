//! Coordinate normalization
//!
//! Observation `location` fields arrive as a `"lat,lng"` string, a
//! two-element array of numbers or numeric strings, or (already normalized)
//! a pair of floats. Place records instead carry `latitude`/`longitude`
//! string fields. Both shapes normalize to 64-bit floats; absent or
//! malformed values are left untouched.

use crate::types::JsonValue;
use serde_json::json;
use tracing::debug;

/// Parse a coordinate pair `(lat, lng)` from any of the accepted shapes
pub fn parse_coordinates(value: &JsonValue) -> Option<(f64, f64)> {
    match value {
        JsonValue::String(s) => {
            let (lat, lng) = s.split_once(',')?;
            Some((lat.trim().parse().ok()?, lng.trim().parse().ok()?))
        }
        JsonValue::Array(items) if items.len() == 2 => {
            Some((coerce_float(&items[0])?, coerce_float(&items[1])?))
        }
        _ => None,
    }
}

fn coerce_float(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Normalize the `location` field of a record to a `[lat, lng]` float pair,
/// returning the new record. Absent, null, or malformed locations are left
/// unchanged.
pub fn convert_coordinates(mut item: JsonValue) -> JsonValue {
    let Some(obj) = item.as_object_mut() else {
        return item;
    };
    let Some(location) = obj.get("location") else {
        return item;
    };
    if location.is_null() {
        return item;
    }
    match parse_coordinates(location) {
        Some((lat, lng)) => {
            obj.insert("location".to_string(), json!([lat, lng]));
        }
        None => debug!(?location, "could not parse location, leaving unchanged"),
    }
    item
}

/// Normalize coordinates across a batch of observation records
pub fn convert_all_coordinates(items: Vec<JsonValue>) -> Vec<JsonValue> {
    items.into_iter().map(convert_coordinates).collect()
}

/// Normalize the string `latitude`/`longitude` fields of a place record
pub fn convert_place_coordinates(mut item: JsonValue) -> JsonValue {
    let Some(obj) = item.as_object_mut() else {
        return item;
    };
    for field in ["latitude", "longitude"] {
        let Some(value) = obj.get(field) else {
            continue;
        };
        if value.is_null() || value.is_number() {
            continue;
        }
        match coerce_float(value) {
            Some(parsed) => {
                obj.insert(field.to_string(), json!(parsed));
            }
            None => debug!(field, ?value, "could not parse place coordinate"),
        }
    }
    item
}

/// Normalize coordinates across a batch of place records
pub fn convert_places_to_float(items: Vec<JsonValue>) -> Vec<JsonValue> {
    items.into_iter().map(convert_place_coordinates).collect()
}
