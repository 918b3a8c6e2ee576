//! Endpoint surface
//!
//! [`Client`] wraps the transport, throttle, and configuration, and exposes
//! one method per logical endpoint. Endpoint methods are thin: they marshal
//! parameters, delegate paging to the pagination engine, and normalize
//! results through the conversion layer.

mod observations;
mod places;
mod taxa;

pub use places::NearbyPlaces;
pub use taxa::rank_range;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpTransport, Method, Throttle, Transport};
use crate::pagination::{PageRequest, PaginationStrategy, Paginator};
use crate::types::{JsonValue, RequestParams};

/// One page of search results, already normalized
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// Total number of results matching the query, as reported by the server
    pub total_results: u64,
    /// The items in this page, in server-returned order
    pub results: Vec<JsonValue>,
}

impl SearchResults {
    fn from_response(body: &JsonValue) -> Result<Self> {
        let total_results = body
            .get("total_results")
            .and_then(JsonValue::as_u64)
            .ok_or_else(|| Error::malformed("total_results", "expected an integer count"))?;
        let results = body
            .get("results")
            .and_then(JsonValue::as_array)
            .cloned()
            .ok_or_else(|| Error::malformed("results", "expected an array of items"))?;
        Ok(Self {
            total_results,
            results,
        })
    }
}

/// Client for the iNaturalist node API
pub struct Client {
    transport: HttpTransport,
    throttle: Throttle,
}

impl Client {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            throttle: Throttle::new(),
        })
    }

    /// Share a throttle with other clients against the same host
    #[must_use]
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Generic paginated fetch: drain every page of an endpoint into one
    /// combined list of raw items.
    pub async fn fetch_all(
        &self,
        endpoint: &str,
        params: RequestParams,
        strategy: PaginationStrategy,
        per_page: u32,
    ) -> Result<Vec<JsonValue>> {
        self.paginate(endpoint, params, strategy, per_page)
            .collect_all()
            .await
    }

    /// Build a lazy paginator over an endpoint, for callers that want to
    /// consume items on demand instead of draining everything.
    pub fn paginate(
        &self,
        endpoint: &str,
        params: RequestParams,
        strategy: PaginationStrategy,
        per_page: u32,
    ) -> Paginator<'_> {
        let mut request = PageRequest::new(endpoint, params, strategy, per_page);
        if let Some(token) = &self.config().access_token {
            request = request.with_access_token(token.clone());
        }
        Paginator::new(&self.transport, request).with_throttle(self.throttle.clone())
    }

    /// One unpaginated GET, with status classification.
    ///
    /// `resource` names the entity kind for the typed not-found signal.
    pub(crate) async fn get_json(
        &self,
        endpoint: &str,
        params: &RequestParams,
        resource: &str,
    ) -> Result<JsonValue> {
        let response = self
            .transport
            .request(Method::Get, endpoint, params, None)
            .await?;
        if response.status == 404 {
            return Err(Error::not_found(resource));
        }
        if !response.is_success() {
            return Err(Error::api_status(response.status, response.body.to_string()));
        }
        Ok(response.body)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
