//! Client configuration
//!
//! Configuration is an explicit object passed to the transport and paginator
//! at construction time, never read from ambient globals. The dry-run toggle
//! replaces real requests with a canned empty page, for testing call wiring
//! without network access.

use crate::types::{DEFAULT_PER_PAGE, NODE_API_BASE_URL};
use std::time::Duration;

/// Configuration for the iNaturalist client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// User agent string sent with every request
    pub user_agent: String,
    /// Optional bearer token, attached to each request when present
    pub access_token: Option<String>,
    /// Default page size for paginated endpoints
    pub per_page: u32,
    /// Request timeout
    pub timeout: Duration,
    /// When set, log requests instead of sending them
    pub dry_run: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: NODE_API_BASE_URL.to_string(),
            user_agent: format!("inat-client/{}", env!("CARGO_PKG_VERSION")),
            access_token: None,
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(30),
            dry_run: false,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the bearer token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = Some(token.into());
        self
    }

    /// Set the default page size
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.config.per_page = per_page;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Enable dry-run mode
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.config.dry_run = enabled;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, NODE_API_BASE_URL);
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
        assert!(config.access_token.is_none());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder()
            .base_url("https://api.example.org/v1/")
            .user_agent("test-agent/1.0")
            .access_token("token123")
            .per_page(50)
            .timeout(Duration::from_secs(5))
            .dry_run(true)
            .build();

        assert_eq!(config.base_url, "https://api.example.org/v1/");
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert_eq!(config.access_token.as_deref(), Some("token123"));
        assert_eq!(config.per_page, 50);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.dry_run);
    }
}
