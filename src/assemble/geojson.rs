//! GeoJSON assembly (RFC 7946)
//!
//! Builds a `FeatureCollection` from normalized observation records. Items
//! without a usable coordinate pair are skipped, never failed on: a partial
//! map is more useful than no map.

use crate::convert::{flatten, parse_coordinates};
use crate::types::{JsonObject, JsonValue, DEFAULT_OBSERVATION_PROPERTIES};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A GeoJSON point geometry, coordinates in `[lng, lat]` order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl Geometry {
    /// Create a point geometry from a `(lat, lng)` pair
    pub fn point(lat: f64, lng: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            // GeoJSON positions are longitude first
            coordinates: [lng, lat],
        }
    }
}

/// A GeoJSON feature: one observation with selected properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Geometry,
    pub properties: JsonObject,
}

/// A GeoJSON feature collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check whether the collection has no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Assemble normalized items into a `FeatureCollection`.
///
/// Each item is flattened to dotted-path keys and the caller-selected
/// properties (defaulting to [`DEFAULT_OBSERVATION_PROPERTIES`]) are
/// attached to its feature. Items whose `location` does not yield a
/// coordinate pair are skipped with a debug log.
pub fn as_feature_collection(items: &[JsonValue], properties: Option<&[&str]>) -> FeatureCollection {
    let properties = properties.unwrap_or(DEFAULT_OBSERVATION_PROPERTIES);

    let features = items
        .iter()
        .filter_map(|item| {
            let flat = flatten(item);
            let Some((lat, lng)) = flat.get("location").and_then(parse_coordinates) else {
                debug!(id = ?flat.get("id"), "item has no usable coordinates, skipping");
                return None;
            };
            let selected = properties
                .iter()
                .filter_map(|&key| flat.get(key).map(|v| (key.to_string(), v.clone())))
                .collect();
            Some(Feature {
                kind: "Feature".to_string(),
                geometry: Geometry::point(lat, lng),
                properties: selected,
            })
        })
        .collect();

    FeatureCollection {
        kind: "FeatureCollection".to_string(),
        features,
    }
}
