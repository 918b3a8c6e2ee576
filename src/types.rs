//! Common types used throughout the client
//!
//! Shared type aliases, the request parameter map, and crate-wide constants.

use serde_json::Value;
use std::fmt;
use std::time::Duration;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = Value;

/// JSON object type; preserves insertion order
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the iNaturalist node API
pub const NODE_API_BASE_URL: &str = "https://api.inaturalist.org/v1/";

/// Maximum number of results the server returns per page
pub const DEFAULT_PER_PAGE: u32 = 200;

/// Minimum delay enforced between consecutive page fetches.
///
/// Process-wide constant; per-call overrides are a possible future extension.
pub const THROTTLE_INTERVAL: Duration = Duration::from_secs(1);

/// Observation attributes exported as GeoJSON feature properties by default
pub const DEFAULT_OBSERVATION_PROPERTIES: &[&str] =
    &["id", "species_guess", "observed_on", "photo_url"];

// ============================================================================
// Request Parameters
// ============================================================================

/// A single query parameter value: a scalar or a list of scalars.
///
/// Lists render comma-joined, matching how the iNaturalist API accepts
/// multiple-value parameters (e.g. `taxon_id=1,2,3`).
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Render the value as it appears in a query string
    pub fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items
                .iter()
                .map(ParamValue::render)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Interpret the value as an integer, if it is one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Check that the value is an integer or a list of integers
    pub fn is_int_or_int_list(&self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::List(items) => !items.is_empty() && items.iter().all(|v| v.as_int().is_some()),
            _ => false,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

/// An insertion-ordered query parameter map.
///
/// Recognized keys are documented per endpoint; unknown keys pass through
/// untouched to the transport layer. Setting an existing key replaces its
/// value in place, keeping ordering deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    entries: Vec<(String, ParamValue)>,
}

impl RequestParams {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any existing value for the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style variant of [`set`](Self::set)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Get a parameter value by key
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remove a parameter, returning its value if present
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render all entries as query string pairs
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.render()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_value_render() {
        assert_eq!(ParamValue::from("abc").render(), "abc");
        assert_eq!(ParamValue::from(42).render(), "42");
        assert_eq!(ParamValue::from(true).render(), "true");
        assert_eq!(ParamValue::from(vec![1, 2, 3]).render(), "1,2,3");
    }

    #[test]
    fn test_param_value_int_checks() {
        assert!(ParamValue::from(7).is_int_or_int_list());
        assert!(ParamValue::from(vec![1, 2]).is_int_or_int_list());
        assert!(!ParamValue::from("x").is_int_or_int_list());
        assert!(!ParamValue::List(vec![]).is_int_or_int_list());
        assert_eq!(ParamValue::from("12").as_int(), Some(12));
    }

    #[test]
    fn test_request_params_set_replaces_in_place() {
        let mut params = RequestParams::new()
            .with("taxon_id", 1)
            .with("per_page", 200);
        params.set("taxon_id", 2);

        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["taxon_id", "per_page"]);
        assert_eq!(params.get("taxon_id"), Some(&ParamValue::Int(2)));
    }

    #[test]
    fn test_request_params_remove() {
        let mut params = RequestParams::new().with("page", 3).with("q", "birds");
        assert_eq!(params.remove("page"), Some(ParamValue::Int(3)));
        assert!(!params.contains("page"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_to_query_pairs_preserves_order() {
        let params = RequestParams::new()
            .with("order_by", "id")
            .with("order", "asc")
            .with("per_page", 200);
        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("order_by".to_string(), "id".to_string()),
                ("order".to_string(), "asc".to_string()),
                ("per_page".to_string(), "200".to_string()),
            ]
        );
    }
}
