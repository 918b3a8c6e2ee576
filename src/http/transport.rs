//! Transport trait and reqwest implementation

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{JsonValue, RequestParams};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};
use url::Url;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A raw response: status code plus parsed JSON body.
///
/// Non-success statuses are returned, not raised; classification into the
/// error taxonomy happens in the page fetcher.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: JsonValue,
}

impl RawResponse {
    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP round trip. The only collaborator the pagination engine talks to.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request against an endpoint path relative to the base URL.
    ///
    /// Fails with [`Error::Transport`] on network-level problems; any HTTP
    /// status, success or not, comes back as a [`RawResponse`].
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &RequestParams,
        access_token: Option<&str>,
    ) -> Result<RawResponse>;
}

/// Transport backed by reqwest
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Create a transport from a config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// The configuration this transport was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.config.base_url)?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &RequestParams,
        access_token: Option<&str>,
    ) -> Result<RawResponse> {
        let url = self.build_url(path)?;

        if self.config.dry_run {
            info!(%url, ?method, "dry run, skipping request");
            return Ok(RawResponse {
                status: 200,
                body: json!({"total_results": 0, "results": []}),
            });
        }

        let mut request = self
            .client
            .request(method.into(), url.clone())
            .header("Accept", "application/json");
        if !params.is_empty() {
            request = request.query(&params.to_query_pairs());
        }
        if let Some(token) = access_token.or(self.config.access_token.as_deref()) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(Error::Transport)?;
        let status = response.status().as_u16();
        let body = response.json().await.unwrap_or(JsonValue::Null);

        debug!(%url, status, "request complete");
        Ok(RawResponse { status, body })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.config.base_url)
            .field("dry_run", &self.config.dry_run)
            .finish_non_exhaustive()
    }
}
