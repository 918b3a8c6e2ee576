//! Response normalization
//!
//! Supports: timestamps, coordinates, nested-field flattening, histograms
//!
//! # Overview
//!
//! Conversion functions are pure and total over JSON-shaped values: they
//! never fail on malformed input, converting best-effort and leaving a field
//! unchanged (with a debug log) when the expected pattern is absent. Each
//! function returns a new normalized value rather than mutating in place,
//! and normalization is idempotent: applying it twice is a no-op.

mod coordinates;
mod flatten;
mod histogram;
mod timestamps;

pub use coordinates::{
    convert_all_coordinates, convert_coordinates, convert_place_coordinates,
    convert_places_to_float, parse_coordinates,
};
pub use flatten::flatten;
pub use histogram::{convert_histogram, convert_histogram_buckets, Histogram};
pub use timestamps::{
    convert_all_timestamps, convert_generic_timestamps, convert_observation_timestamps,
    parse_timestamp, Timestamp,
};

use crate::types::JsonValue;

/// Normalize a single observation record: coordinates and timestamps.
///
/// This is the default normalizer applied per page by the paginator on
/// observation endpoints.
pub fn normalize_observation(item: JsonValue) -> JsonValue {
    convert_observation_timestamps(convert_coordinates(item))
}
