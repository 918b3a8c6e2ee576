//! Histogram conversion
//!
//! The histogram endpoint returns counts keyed by calendar bucket labels,
//! nested under the interval name:
//!
//! ```json
//! {"total_results": 2, "results": {"month_of_year": {"1": 8, "2": 10}}}
//! ```
//!
//! Keys for the `month_of_year` and `week_of_year` intervals are small
//! integers; keys for every other interval are date labels parsed into
//! structured date-times.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::debug;

/// Intervals whose bucket keys are indexes into the calendar year
const INDEXED_INTERVALS: &[&str] = &["month_of_year", "week_of_year"];

/// A time-bucketed count mapping with keys typed per interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Histogram {
    /// Month-of-year (1-12) or week-of-year (1-53) buckets
    ByIndex(BTreeMap<u32, u64>),
    /// Year, month, week, day, or hour buckets
    ByDate(BTreeMap<NaiveDateTime, u64>),
}

impl Histogram {
    /// Total count across all buckets
    pub fn total(&self) -> u64 {
        match self {
            Self::ByIndex(buckets) => buckets.values().sum(),
            Self::ByDate(buckets) => buckets.values().sum(),
        }
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        match self {
            Self::ByIndex(buckets) => buckets.len(),
            Self::ByDate(buckets) => buckets.len(),
        }
    }

    /// Check whether the histogram has no buckets
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Convert a full histogram response.
///
/// The interval is not echoed back as a separate field; it is the single
/// key under `results`. A response without one is malformed.
pub fn convert_histogram(response: &JsonValue) -> Result<Histogram> {
    let (interval, buckets) = response
        .get("results")
        .and_then(JsonValue::as_object)
        .and_then(|results| results.iter().next())
        .ok_or_else(|| Error::malformed("results", "expected an interval keyed object"))?;
    let buckets = buckets
        .as_object()
        .ok_or_else(|| Error::malformed("results", "expected bucket counts per interval"))?;
    Ok(convert_histogram_buckets(interval, buckets))
}

/// Convert raw bucket counts for a known interval.
///
/// Unparseable keys or counts are skipped with a debug log rather than
/// failing the whole conversion.
pub fn convert_histogram_buckets(interval: &str, buckets: &JsonObject) -> Histogram {
    if INDEXED_INTERVALS.contains(&interval) {
        let converted = buckets
            .iter()
            .filter_map(|(key, count)| match (key.parse(), count.as_u64()) {
                (Ok(index), Some(count)) => Some((index, count)),
                _ => {
                    debug!(interval, key, "skipping unparseable histogram bucket");
                    None
                }
            })
            .collect();
        Histogram::ByIndex(converted)
    } else {
        let converted = buckets
            .iter()
            .filter_map(|(key, count)| match (parse_bucket_date(key), count.as_u64()) {
                (Some(date), Some(count)) => Some((date, count)),
                _ => {
                    debug!(interval, key, "skipping unparseable histogram bucket");
                    None
                }
            })
            .collect();
        Histogram::ByDate(converted)
    }
}

/// Parse a date bucket label: `2020`, `2020-03`, `2020-03-01`, or a full
/// date-time for the hour interval.
fn parse_bucket_date(label: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(label) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(label, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{label}-01"), "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(year) = label.parse::<i32>() {
        return NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0);
    }
    None
}
