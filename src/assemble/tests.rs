//! Tests for the response assembly module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_geometry_point_is_lng_lat() {
    let geometry = Geometry::point(50.646894, 4.360086);
    assert_eq!(geometry.coordinates, [4.360086, 50.646894]);
    assert_eq!(geometry.kind, "Point");
}

#[test]
fn test_feature_collection_skips_items_without_coordinates() {
    let items = vec![
        json!({"id": 1, "location": [50.646894, 4.360086], "species_guess": "Lixus bardanae"}),
        json!({"id": 2, "species_guess": "no location"}),
        json!({"id": 3, "location": "48.8584,2.2945", "species_guess": "Pieris rapae"}),
    ];

    let collection = as_feature_collection(&items, None);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.features[0].geometry.coordinates, [4.360086, 50.646894]);
    assert_eq!(collection.features[1].geometry.coordinates, [2.2945, 48.8584]);
}

#[test]
fn test_feature_collection_default_properties() {
    let items = vec![json!({
        "id": 16227955,
        "location": [50.646894, 4.360086],
        "species_guess": "Lixus bardanae",
        "observed_on": "2018-09-05T14:06:00+01:00",
        "description": "not a default property",
    })];

    let collection = as_feature_collection(&items, None);
    let properties = &collection.features[0].properties;
    assert_eq!(properties["id"], json!(16227955));
    assert_eq!(properties["species_guess"], "Lixus bardanae");
    assert_eq!(properties["observed_on"], "2018-09-05T14:06:00+01:00");
    // photo_url is absent from the item, so absent from the feature
    assert!(!properties.contains_key("photo_url"));
    assert!(!properties.contains_key("description"));
}

#[test]
fn test_feature_collection_custom_flattened_properties() {
    let items = vec![json!({
        "id": 1,
        "location": [50.0, 4.0],
        "taxon": {"name": "Lixus bardanae", "rank": "species"},
    })];

    let collection = as_feature_collection(&items, Some(&["taxon.name"]));
    let properties = &collection.features[0].properties;
    assert_eq!(properties["taxon.name"], "Lixus bardanae");
    assert_eq!(properties.len(), 1);
}

#[test]
fn test_feature_collection_serializes_as_rfc7946() {
    let items = vec![json!({"id": 1, "location": [50.646894, 4.360086]})];
    let collection = as_feature_collection(&items, Some(&["id"]));

    let serialized = serde_json::to_value(&collection).unwrap();
    assert_eq!(serialized["type"], "FeatureCollection");
    assert_eq!(serialized["features"][0]["type"], "Feature");
    assert_eq!(serialized["features"][0]["geometry"]["type"], "Point");
    assert_eq!(
        serialized["features"][0]["geometry"]["coordinates"],
        json!([4.360086, 50.646894])
    );
    assert_eq!(serialized["features"][0]["properties"]["id"], 1);
}

#[test]
fn test_empty_items_make_empty_collection() {
    let collection = as_feature_collection(&[], None);
    assert!(collection.is_empty());
}
