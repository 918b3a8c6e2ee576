//! Taxon endpoints

use super::{Client, SearchResults};
use crate::error::{Error, Result};
use crate::types::RequestParams;

/// Taxonomic ranks, most to least specific
const RANKS: &[&str] = &[
    "form",
    "variety",
    "subspecies",
    "hybrid",
    "species",
    "genushybrid",
    "subgenus",
    "genus",
    "subtribe",
    "tribe",
    "supertribe",
    "subfamily",
    "family",
    "epifamily",
    "superfamily",
    "infraorder",
    "suborder",
    "order",
    "superorder",
    "infraclass",
    "subclass",
    "class",
    "superclass",
    "subphylum",
    "phylum",
    "kingdom",
];

/// Expand a min/max rank pair into the inclusive list of ranks between
/// them, for the `rank` multiple-choice parameter.
pub fn rank_range(min_rank: Option<&str>, max_rank: Option<&str>) -> Result<Vec<&'static str>> {
    let position = |rank: &str, name: &str| {
        RANKS
            .iter()
            .position(|&r| r == rank)
            .ok_or_else(|| Error::invalid_param(name, format!("unrecognized rank '{rank}'")))
    };
    let min_index = match min_rank {
        Some(rank) => position(rank, "min_rank")?,
        None => 0,
    };
    let max_index = match max_rank {
        Some(rank) => position(rank, "max_rank")?,
        None => RANKS.len() - 1,
    };
    Ok(RANKS[min_index..=max_index].to_vec())
}

pub(super) fn validate_ids(name: &str, ids: &[u64]) -> Result<String> {
    if ids.is_empty() {
        return Err(Error::invalid_param(name, "must specify at least one id"));
    }
    Ok(ids
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(","))
}

impl Client {
    /// Search taxa. `min_rank`/`max_rank` expand into the inclusive `rank`
    /// list, overriding any explicit `rank` parameter.
    pub async fn get_taxa(
        &self,
        mut params: RequestParams,
        min_rank: Option<&str>,
        max_rank: Option<&str>,
    ) -> Result<SearchResults> {
        if min_rank.is_some() || max_rank.is_some() {
            let ranks = rank_range(min_rank, max_rank)?;
            params.set("rank", ranks.into_iter().map(String::from).collect::<Vec<_>>());
        }
        let body = self.get_json("taxa", &params, "Taxon").await?;
        SearchResults::from_response(&body)
    }

    /// Get one or more taxa by id
    pub async fn get_taxa_by_id(&self, taxon_ids: &[u64]) -> Result<SearchResults> {
        let ids = validate_ids("taxon_id", taxon_ids)?;
        let body = self
            .get_json(&format!("taxa/{ids}"), &RequestParams::new(), "Taxon")
            .await?;
        SearchResults::from_response(&body)
    }

    /// Get taxa with names starting with the query string
    pub async fn get_taxa_autocomplete(&self, q: &str) -> Result<SearchResults> {
        let params = RequestParams::new().with("q", q);
        let body = self.get_json("taxa/autocomplete", &params, "Taxon").await?;
        SearchResults::from_response(&body)
    }
}
