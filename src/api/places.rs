//! Place endpoints
//!
//! Place records report coordinates as string `latitude`/`longitude`
//! fields; every method here normalizes them to floats.

use super::taxa::validate_ids;
use super::{Client, SearchResults};
use crate::convert::convert_places_to_float;
use crate::error::{Error, Result};
use crate::types::{JsonValue, RequestParams};

/// Places near a bounding box, split by curation status
#[derive(Debug, Clone)]
pub struct NearbyPlaces {
    /// Standard, curator-approved places
    pub standard: Vec<JsonValue>,
    /// Community-contributed places
    pub community: Vec<JsonValue>,
}

impl Client {
    /// Get one or more places by id
    pub async fn get_places_by_id(&self, place_ids: &[u64]) -> Result<SearchResults> {
        let ids = validate_ids("place_id", place_ids)?;
        let body = self
            .get_json(&format!("places/{ids}"), &RequestParams::new(), "Place")
            .await?;
        let mut page = SearchResults::from_response(&body)?;
        page.results = convert_places_to_float(page.results);
        Ok(page)
    }

    /// Get curated and community places within a bounding box, optionally
    /// filtered by name. The box is given as NE then SW corners.
    pub async fn get_places_nearby(
        &self,
        nelat: f64,
        nelng: f64,
        swlat: f64,
        swlng: f64,
        name: Option<&str>,
    ) -> Result<NearbyPlaces> {
        let mut params = RequestParams::new()
            .with("nelat", nelat)
            .with("nelng", nelng)
            .with("swlat", swlat)
            .with("swlng", swlng);
        if let Some(name) = name {
            params.set("name", name);
        }
        let body = self.get_json("places/nearby", &params, "Place").await?;

        let results = body
            .get("results")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| Error::malformed("results", "expected standard/community lists"))?;
        let list = |key: &str| {
            results
                .get(key)
                .and_then(JsonValue::as_array)
                .cloned()
                .unwrap_or_default()
        };
        Ok(NearbyPlaces {
            standard: convert_places_to_float(list("standard")),
            community: convert_places_to_float(list("community")),
        })
    }

    /// Get places with names starting with the query string
    pub async fn get_places_autocomplete(&self, q: &str) -> Result<SearchResults> {
        let params = RequestParams::new().with("q", q);
        let body = self.get_json("places/autocomplete", &params, "Place").await?;
        let mut page = SearchResults::from_response(&body)?;
        page.results = convert_places_to_float(page.results);
        Ok(page)
    }
}
