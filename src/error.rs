//! Error types for the iNaturalist client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Errors always terminate the current pagination sequence and are surfaced
//! to the caller; retries, if any, belong to the transport layer.

use thiserror::Error;

/// The main error type for the iNaturalist client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// Network-level failure, propagated unchanged from the HTTP layer
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // API Errors
    // ============================================================================
    /// Non-success HTTP status that is not a recognized not-found case
    #[error("API error (HTTP {status}): {body}")]
    ApiStatus { status: u16, body: String },

    /// A single-resource lookup yielded zero results
    #[error("{resource} not found")]
    NotFound { resource: String },

    // ============================================================================
    // Response Errors
    // ============================================================================
    /// A field required for correctness is absent from an otherwise
    /// successful response (e.g. the item id needed for a keyset cursor)
    #[error("Malformed response, missing '{field}': {message}")]
    MalformedResponse { field: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Parameter Errors
    // ============================================================================
    #[error("Invalid value for parameter '{name}': {message}")]
    InvalidParam { name: String, message: String },
}

impl Error {
    /// Create an API status error
    pub fn api_status(status: u16, body: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a not-found error for a resource kind
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParam {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Check if this error is the typed not-found signal
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for the iNaturalist client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::api_status(500, "internal error");
        assert_eq!(err.to_string(), "API error (HTTP 500): internal error");

        let err = Error::not_found("Observation");
        assert_eq!(err.to_string(), "Observation not found");

        let err = Error::malformed("total_results", "expected an integer");
        assert_eq!(
            err.to_string(),
            "Malformed response, missing 'total_results': expected an integer"
        );

        let err = Error::invalid_param("taxon_id", "must specify integers only");
        assert_eq!(
            err.to_string(),
            "Invalid value for parameter 'taxon_id': must specify integers only"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("Observation").is_not_found());
        assert!(!Error::api_status(500, "").is_not_found());
        assert!(!Error::malformed("id", "").is_not_found());
    }
}
