//! Observation endpoints

use super::{Client, SearchResults};
use crate::assemble::{as_feature_collection, FeatureCollection};
use crate::convert::{
    convert_all_coordinates, convert_all_timestamps, convert_generic_timestamps, convert_histogram,
    normalize_observation, Histogram,
};
use crate::error::{Error, Result};
use crate::pagination::PaginationStrategy;
use crate::types::{JsonValue, ParamValue, RequestParams};
use tracing::warn;

/// Server-side result cap on the observers and identifiers endpoints
const USER_RESULTS_PER_PAGE: u32 = 500;

impl Client {
    /// Search observations; one page, normalized.
    ///
    /// Pagination parameters (`page`, `per_page`, `id_above`, `id_below`)
    /// pass through untouched; use [`get_all_observations`](Self::get_all_observations)
    /// to drain every page instead.
    pub async fn get_observations(&self, params: RequestParams) -> Result<SearchResults> {
        let body = self.get_json("observations", &params, "Observation").await?;
        let mut page = SearchResults::from_response(&body)?;
        page.results = convert_all_timestamps(convert_all_coordinates(page.results));
        Ok(page)
    }

    /// Get details about a single observation by id.
    ///
    /// An empty result set is the typed not-found signal, distinct from an
    /// empty page during pagination.
    pub async fn get_observation(&self, observation_id: u64) -> Result<JsonValue> {
        let params = RequestParams::new().with("id", observation_id);
        let mut page = self.get_observations(params).await?;
        if page.results.is_empty() {
            return Err(Error::not_found("Observation"));
        }
        Ok(page.results.remove(0))
    }

    /// Search observations and drain all pages into one combined list.
    ///
    /// The observation index is too large for page-number jumps, so this
    /// always uses keyset pagination; an explicit `page` parameter is
    /// stripped with a warning.
    pub async fn get_all_observations(&self, mut params: RequestParams) -> Result<Vec<JsonValue>> {
        if params.remove("page").is_some() {
            warn!("`page` cannot be combined with a full observation fetch, ignoring it");
        }
        self.paginate(
            "observations",
            params,
            PaginationStrategy::IdAbove,
            self.config().per_page,
        )
        .with_normalizer(normalize_observation)
        .collect_all()
        .await
    }

    /// Get all leaf taxa (species, subspecies, etc.) matching the search
    /// criteria, with the count of observations each is associated with.
    pub async fn get_observation_species_counts(
        &self,
        params: RequestParams,
    ) -> Result<Vec<JsonValue>> {
        self.paginate(
            "observations/species_counts",
            params,
            PaginationStrategy::PageNumber,
            self.config().per_page,
        )
        .collect_all()
        .await
    }

    /// Get observers of observations matching the search criteria, with the
    /// count of observations and distinct species each has observed.
    ///
    /// `order_by` may be `observation_count` (the default) or
    /// `species_count`. The server returns at most 500 results.
    pub async fn get_observation_observers(
        &self,
        params: RequestParams,
    ) -> Result<Vec<JsonValue>> {
        self.fetch_user_counts("observations/observers", params).await
    }

    /// Get identifiers of observations matching the search criteria, with
    /// the count of observations each has identified, sorted by that count
    /// descending. The server returns at most 500 results.
    pub async fn get_observation_identifiers(
        &self,
        params: RequestParams,
    ) -> Result<Vec<JsonValue>> {
        self.fetch_user_counts("observations/identifiers", params).await
    }

    async fn fetch_user_counts(
        &self,
        endpoint: &str,
        mut params: RequestParams,
    ) -> Result<Vec<JsonValue>> {
        let per_page = params
            .remove("per_page")
            .and_then(|value| value.as_int())
            .map_or(USER_RESULTS_PER_PAGE, |value| value as u32);
        self.paginate(endpoint, params, PaginationStrategy::PageNumber, per_page)
            .collect_all()
            .await
    }

    /// Get observation counts for every taxon in a user's full taxonomic
    /// tree, drained across all pages. The web UI builds life lists from
    /// this data.
    pub async fn get_observation_taxonomy(
        &self,
        user_id: impl Into<ParamValue>,
        params: RequestParams,
    ) -> Result<Vec<JsonValue>> {
        self.paginate(
            "observations/taxonomy",
            params.with("user_id", user_id),
            PaginationStrategy::PageNumber,
            self.config().per_page,
        )
        .collect_all()
        .await
    }

    /// Get information about an observation's taxon, in the context of the
    /// observation's location, with timestamps on the conservation status
    /// and listed taxon normalized.
    pub async fn get_observation_taxon_summary(&self, observation_id: u64) -> Result<JsonValue> {
        let mut body = self
            .get_json(
                &format!("observations/{observation_id}/taxon_summary"),
                &RequestParams::new(),
                "Observation",
            )
            .await?;
        if let Some(obj) = body.as_object_mut() {
            for field in ["conservation_status", "listed_taxon"] {
                if let Some(value) = obj.get_mut(field) {
                    *value = convert_generic_timestamps(value.take());
                }
            }
        }
        Ok(body)
    }

    /// Search observations and return histogram data for a time interval.
    ///
    /// `interval` may be `year`, `month`, `week`, `day`, `hour`,
    /// `month_of_year`, or `week_of_year`; the key type of the returned
    /// histogram follows the interval.
    pub async fn get_observation_histogram(&self, params: RequestParams) -> Result<Histogram> {
        let body = self
            .get_json("observations/histogram", &params, "Observation")
            .await?;
        convert_histogram(&body)
    }

    /// Get all matching observations as a GeoJSON `FeatureCollection`.
    ///
    /// Forces `mappable=true` so only observations with usable coordinates
    /// are searched; items that still lack coordinates are skipped, not
    /// failed on.
    pub async fn get_geojson_observations(
        &self,
        params: RequestParams,
        properties: Option<&[&str]>,
    ) -> Result<FeatureCollection> {
        let params = params.with("mappable", true);
        let observations = self.get_all_observations(params).await?;
        Ok(as_feature_collection(&observations, properties))
    }
}
