//! Raw feed types and the feature-collection shape check.
//!
//! The upstream feed is IEM Local Storm Reports GeoJSON:
//! <https://mesonet.agron.iastate.edu/geojson/lsr.geojson>

use serde::Deserialize;
use serde_json::Value;

/// The `properties` bag of one raw feed feature.
///
/// Every field is optional; the feed routinely omits or aliases them
/// (`typetext` vs `type`, `state` vs `st`). Resolution happens in the
/// normalizer, never here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFeedRecord {
    #[serde(default)]
    pub typetext: Option<String>,
    /// Single-letter report type code, the fallback for `typetext`.
    #[serde(default, rename = "type")]
    pub type_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub st: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    /// Arrives as a JSON number or a string (sometimes `""` or
    /// `"null"`) depending on report type; kept loose until
    /// normalization.
    #[serde(default)]
    pub magnitude: Option<Value>,
    #[serde(default)]
    pub unit: Option<String>,
    /// Observation timestamp, ISO 8601 with or without an offset.
    #[serde(default)]
    pub valid: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: RawFeedRecord,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

/// Result of the feed shape check.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedPayload {
    /// The body declared itself a feature collection; these are its
    /// feature properties, in feed order.
    Reports(Vec<RawFeedRecord>),
    /// Any other valid JSON, pretty-printed for verbatim display.
    Unstructured(String),
}

/// Accept the body only if it declares itself a feature collection
/// with a features array; any other JSON shape falls back to the
/// pretty-printed passthrough. Invalid JSON is the caller's error.
pub fn parse_feed(body: &str) -> Result<FeedPayload, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;

    let is_feature_collection = value.get("type").and_then(Value::as_str) == Some("FeatureCollection")
        && value.get("features").map(Value::is_array).unwrap_or(false);
    if !is_feature_collection {
        return Ok(FeedPayload::Unstructured(serde_json::to_string_pretty(
            &value,
        )?));
    }

    let collection: FeatureCollection = serde_json::from_value(value)?;
    Ok(FeedPayload::Reports(
        collection
            .features
            .into_iter()
            .map(|feature| feature.properties)
            .collect(),
    ))
}
