//! # inat-client
//!
//! An async Rust client for the iNaturalist v1 API (observations, taxa,
//! places), built around a pagination and response-normalization engine.
//!
//! ## Features
//!
//! - **Full-result pagination**: turn any bounded page endpoint into a lazy,
//!   resumable, throttled iterator over every matching item
//! - **Two cursor strategies**: id-based keyset pagination for the large
//!   observation index, page numbers for small bounded result sets
//! - **Response normalization**: timestamps, coordinates, and nested fields
//!   converted best-effort into a canonical form, idempotently
//! - **Output shapes**: combined lists, GeoJSON `FeatureCollection`s
//!   (RFC 7946), and typed time-bucketed histograms
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use inat_client::{Client, RequestParams, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new()?;
//!
//!     // Every monarch observation in one combined, normalized list
//!     let params = RequestParams::new()
//!         .with("taxon_name", "Danaus plexippus")
//!         .with("place_id", 7953);
//!     let observations = client.get_all_observations(params).await?;
//!
//!     for obs in &observations {
//!         println!("[{}] {}", obs["id"], obs["species_guess"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller params → Page Fetcher (one round trip) → raw JSON page
//!     → Converters (normalize fields) → Paginator (next cursor / stop?)
//!     → repeat until exhausted → Response Assembler (list/GeoJSON/histogram)
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

/// Error types
pub mod error;

/// Common types, request parameters, and constants
pub mod types;

/// Client configuration
pub mod config;

/// Logging setup
pub mod logging;

/// Response normalization (timestamps, coordinates, flattening, histograms)
pub mod convert;

/// HTTP transport boundary and throttling
pub mod http;

/// The pagination engine
pub mod pagination;

/// Response assembly (GeoJSON, histograms)
pub mod assemble;

/// Endpoint surface
pub mod api;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{Client, NearbyPlaces, SearchResults};
pub use assemble::{as_feature_collection, Feature, FeatureCollection};
pub use config::ClientConfig;
pub use convert::Histogram;
pub use error::{Error, Result};
pub use logging::enable_logging;
pub use pagination::{PageRequest, PaginationStrategy, Paginator};
pub use types::{JsonObject, JsonValue, ParamValue, RequestParams};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
