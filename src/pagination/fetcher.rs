//! Page fetcher
//!
//! Issues one bounded request for one page of results and classifies the
//! outcome. The fetcher owns request construction (fixed params + page size
//! + forced sort + cursor) and status classification; it never retries and
//! never loops.

use super::types::{Cursor, PaginationStrategy};
use crate::error::{Error, Result};
use crate::http::{Method, Transport};
use crate::types::{JsonValue, RequestParams};
use tracing::debug;

/// An immutable description of a paginated request.
///
/// Everything here is fixed for the lifetime of a paginator; only the
/// cursor advances, and that lives in the paginator state.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Endpoint path relative to the API base URL, e.g. `observations`
    pub endpoint: String,
    /// Fixed caller parameters; unknown keys pass through untouched
    pub params: RequestParams,
    /// Cursoring strategy for this endpoint
    pub strategy: PaginationStrategy,
    /// Page size requested from the server
    pub per_page: u32,
    /// Optional bearer token attached to each fetch
    pub access_token: Option<String>,
}

impl PageRequest {
    /// Create a page request with the given strategy
    pub fn new(
        endpoint: impl Into<String>,
        params: RequestParams,
        strategy: PaginationStrategy,
        per_page: u32,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            params,
            strategy,
            per_page,
            access_token: None,
        }
    }

    /// Attach a bearer token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

/// One raw page plus the metadata needed to decide what happens next
#[derive(Debug, Clone)]
pub struct PageResult {
    /// Raw item mappings, in server-returned order
    pub results: Vec<JsonValue>,
    /// Authoritative count of results matching the (cursor-filtered) query
    pub total_results: u64,
    /// Number of items actually returned in this page
    pub returned: usize,
    /// Id of the last item, for deriving the next keyset cursor
    pub last_id: Option<u64>,
}

/// Fetches single pages through the transport collaborator
pub struct PageFetcher<'a> {
    transport: &'a dyn Transport,
    request: PageRequest,
}

impl<'a> PageFetcher<'a> {
    /// Create a fetcher for one paginated request
    pub fn new(transport: &'a dyn Transport, request: PageRequest) -> Self {
        Self { transport, request }
    }

    /// The request this fetcher was built for
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// Fetch the page addressed by `cursor`.
    ///
    /// Classification: HTTP 404 becomes the typed not-found signal, any
    /// other non-success status becomes [`Error::ApiStatus`], and transport
    /// errors propagate unchanged. A successful response missing
    /// `total_results` or `results` (or, under a keyset strategy, the last
    /// item's `id`) is malformed.
    pub async fn fetch(&self, cursor: &Cursor) -> Result<PageResult> {
        let params = self.build_params(cursor);
        let response = self
            .transport
            .request(
                Method::Get,
                &self.request.endpoint,
                &params,
                self.request.access_token.as_deref(),
            )
            .await?;

        if response.status == 404 {
            return Err(Error::not_found(self.request.endpoint.clone()));
        }
        if !response.is_success() {
            return Err(Error::api_status(response.status, response.body.to_string()));
        }

        let total_results = response
            .body
            .get("total_results")
            .and_then(JsonValue::as_u64)
            .ok_or_else(|| Error::malformed("total_results", "expected an integer count"))?;
        let results = response
            .body
            .get("results")
            .and_then(JsonValue::as_array)
            .cloned()
            .ok_or_else(|| Error::malformed("results", "expected an array of items"))?;

        let last_id = results.last().and_then(|item| item.get("id")?.as_u64());
        if self.request.strategy.is_keyset() && !results.is_empty() && last_id.is_none() {
            return Err(Error::malformed(
                "id",
                "keyset cursor requires a numeric id on the last item",
            ));
        }

        let returned = results.len();
        debug!(
            endpoint = %self.request.endpoint,
            ?cursor,
            returned,
            total_results,
            "fetched page"
        );

        Ok(PageResult {
            results,
            total_results,
            returned,
            last_id,
        })
    }

    /// Merge fixed params with page size, forced sort, and the cursor
    fn build_params(&self, cursor: &Cursor) -> RequestParams {
        let mut params = self.request.params.clone();
        params.set("per_page", self.request.per_page);
        if let Some(sort) = self.request.strategy.sort_params() {
            for (key, value) in sort {
                params.set(key, value);
            }
        }
        match cursor {
            Cursor::Start => {}
            Cursor::Page(page) => params.set(self.request.strategy.cursor_param(), *page),
            Cursor::Id(id) => params.set(self.request.strategy.cursor_param(), *id),
        }
        params
    }
}
