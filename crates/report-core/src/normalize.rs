//! Raw feed records into normalized [`StormReport`]s.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::feed::RawFeedRecord;
use crate::model::StormReport;

/// Fallback when the feed provides neither `typetext` nor `type`.
const UNKNOWN_TYPE: &str = "UNKNOWN";

/// Fallback when the feed provides neither `state` nor `st`.
const UNKNOWN_STATE: &str = "Unknown";

/// Normalize a batch of raw records. Pure.
///
/// Missing optional fields never drop a record; the only exclusion is
/// an unparseable timestamp, which would otherwise corrupt sort order
/// downstream.
pub fn normalize(records: Vec<RawFeedRecord>) -> Vec<StormReport> {
    records.into_iter().filter_map(normalize_record).collect()
}

fn normalize_record(record: RawFeedRecord) -> Option<StormReport> {
    let time = match record.valid.as_deref().and_then(parse_valid_time) {
        Some(time) => time,
        None => {
            debug!(valid = ?record.valid, "Dropping report with unparseable timestamp");
            return None;
        }
    };

    let weather_type = non_empty(record.typetext)
        .or_else(|| non_empty(record.type_code))
        .unwrap_or_else(|| UNKNOWN_TYPE.to_string());
    let state = non_empty(record.state)
        .or_else(|| non_empty(record.st))
        .unwrap_or_else(|| UNKNOWN_STATE.to_string());

    Some(StormReport {
        weather_type,
        state,
        city: record.city.unwrap_or_default(),
        county: non_empty(record.county),
        magnitude: parse_magnitude(record.magnitude),
        unit: record
            .unit
            .filter(|unit| !unit.is_empty() && unit != "null"),
        time,
        remark: record
            .remark
            .filter(|remark| !remark.trim().is_empty() && !remark.eq_ignore_ascii_case("null")),
        source: non_empty(record.source),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// A report has a numeric magnitude only if the raw value is present,
/// non-empty after trimming, not the literal `"null"`, and parses as a
/// number. Anything else is absent, never zero.
fn parse_magnitude(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed == "null" {
                return None;
            }
            trimmed.parse().ok()
        }
        _ => None,
    }
}

/// Feed timestamps are RFC 3339 when they carry an offset; naive forms
/// are taken as UTC (the feed publishes UTC).
fn parse_valid_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    None
}
