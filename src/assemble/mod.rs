//! Response assembly
//!
//! Shapes a fully drained, normalized item sequence into its final form:
//! a flat list (the items unchanged, in server order), a GeoJSON
//! `FeatureCollection` (RFC 7946), or a histogram passed through from the
//! conversion layer.

mod geojson;

pub use geojson::{as_feature_collection, Feature, FeatureCollection, Geometry};

#[cfg(test)]
mod tests;
