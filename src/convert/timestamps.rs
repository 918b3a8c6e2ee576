//! Timestamp normalization
//!
//! The API reports timestamps in several shapes: RFC 3339 with an offset,
//! naive date-times, and bare dates. Normalization parses whatever is there
//! and writes back a canonical string, carrying the original offset when one
//! was present and staying naive when it was not. Canonical strings re-parse
//! to themselves, which is what makes normalization idempotent.

use crate::types::JsonValue;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Timestamp fields present on most record types
const GENERIC_TIME_FIELDS: &[&str] = &["created_at", "last_post_at", "updated_at"];

/// A parsed timestamp, with or without a UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Instant with its original UTC offset
    Offset(DateTime<FixedOffset>),
    /// Naive local time; the source carried no offset
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Canonical string form; parsing it again yields an equal `Timestamp`
    pub fn canonical(&self) -> String {
        match self {
            Self::Offset(dt) => dt.to_rfc3339(),
            Self::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// Parse an ISO 8601-ish timestamp string.
///
/// Accepts RFC 3339, date-times with a compact or space-separated offset,
/// naive date-times, and bare dates (interpreted as midnight). Returns
/// `None` when nothing matches.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(Timestamp::Offset(dt));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%d %H:%M:%S %z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(Timestamp::Offset(dt));
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Timestamp::Naive(dt));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Timestamp::Naive(date.and_hms_opt(0, 0, 0)?));
    }

    None
}

/// Attach a UTC offset (e.g. `"+01:00"`) to a naive timestamp.
///
/// Timestamps that already carry an offset are returned unchanged.
fn apply_offset(ts: Timestamp, offset: &str) -> Timestamp {
    let Timestamp::Naive(naive) = ts else {
        return ts;
    };
    let parsed = DateTime::parse_from_str(
        &format!("{} {}", naive.format("%Y-%m-%d %H:%M:%S"), offset.trim()),
        "%Y-%m-%d %H:%M:%S %:z",
    )
    .or_else(|_| {
        DateTime::parse_from_str(
            &format!("{} {}", naive.format("%Y-%m-%d %H:%M:%S"), offset.trim()),
            "%Y-%m-%d %H:%M:%S %z",
        )
    });
    match parsed {
        Ok(dt) => Timestamp::Offset(dt),
        Err(_) => {
            debug!(offset, "could not apply time zone offset");
            ts
        }
    }
}

/// Normalize one timestamp field of a record, returning the new record.
///
/// The field is left unchanged when absent, null, or unparseable.
fn convert_timestamp_field(mut item: JsonValue, field: &str) -> JsonValue {
    let Some(obj) = item.as_object_mut() else {
        return item;
    };
    let Some(raw) = obj.get(field).and_then(JsonValue::as_str) else {
        return item;
    };
    match parse_timestamp(raw) {
        Some(ts) => {
            let canonical = ts.canonical();
            obj.insert(field.to_string(), JsonValue::String(canonical));
        }
        None => debug!(field, raw, "could not parse timestamp, leaving unchanged"),
    }
    item
}

/// Normalize the generic timestamp fields shared by most record types
pub fn convert_generic_timestamps(mut item: JsonValue) -> JsonValue {
    for field in GENERIC_TIME_FIELDS {
        item = convert_timestamp_field(item, field);
    }
    item
}

/// Normalize observation timestamps.
///
/// `observed_on` is taken from `observed_on_string` when present, since that
/// is the only observation field that preserves the observer's local time;
/// if the parse comes out naive, the record's `time_zone_offset` is applied.
/// Generic fields are normalized as well.
pub fn convert_observation_timestamps(item: JsonValue) -> JsonValue {
    let mut item = convert_generic_timestamps(item);
    let Some(obj) = item.as_object_mut() else {
        return item;
    };

    let raw = obj
        .get("observed_on_string")
        .or_else(|| obj.get("observed_on"))
        .and_then(JsonValue::as_str)
        .map(str::to_string);
    let offset = obj
        .get("time_zone_offset")
        .and_then(JsonValue::as_str)
        .map(str::to_string);

    if let Some(raw) = raw {
        match parse_timestamp(&raw) {
            Some(mut ts) => {
                if let Some(offset) = &offset {
                    ts = apply_offset(ts, offset);
                }
                obj.insert(
                    "observed_on".to_string(),
                    JsonValue::String(ts.canonical()),
                );
            }
            None => debug!(raw, "could not parse observed_on, leaving unchanged"),
        }
    }
    item
}

/// Normalize timestamps across a batch of observation records
pub fn convert_all_timestamps(items: Vec<JsonValue>) -> Vec<JsonValue> {
    items
        .into_iter()
        .map(convert_observation_timestamps)
        .collect()
}
