//! Core domain types shared by the normalizer, aggregator, and renderers.

use chrono::{DateTime, Utc};

/// One normalized storm report.
///
/// Built fresh from the raw feed on every refresh cycle and never
/// mutated afterwards. Optional fields reflect the feed: magnitude is
/// absent for many report types (flash floods in particular), remarks
/// and sources are best-effort.
#[derive(Debug, Clone, PartialEq)]
pub struct StormReport {
    /// Report type as the feed spells it, e.g. `HAIL` or `FLASH FLOOD`.
    /// Original casing is preserved for display; classification is
    /// case-insensitive.
    pub weather_type: String,
    /// Two-letter state/province code, `Unknown` when the feed omits it.
    pub state: String,
    /// Reporting location, often with a bearing prefix (`5 NW Industry`).
    pub city: String,
    pub county: Option<String>,
    /// Numeric magnitude in `unit`, when the raw value parses as one.
    pub magnitude: Option<f64>,
    pub unit: Option<String>,
    /// Observation time (UTC).
    pub time: DateTime<Utc>,
    pub remark: Option<String>,
    pub source: Option<String>,
}

impl StormReport {
    /// Flash floods carry their remark inline instead of a magnitude.
    pub fn is_flash_flood(&self) -> bool {
        self.weather_type.eq_ignore_ascii_case("FLASH FLOOD")
    }
}

/// All reports of one weather type, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportGroup {
    pub weather_type: String,
    pub emoji: &'static str,
    pub reports: Vec<StormReport>,
}

impl ReportGroup {
    pub fn count(&self) -> usize {
        self.reports.len()
    }
}

/// Number of reports observed in one state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateCount {
    pub state: String,
    pub count: usize,
}

/// The aggregated view of one refresh cycle.
///
/// `states` is sorted by count descending, `groups` by member count
/// descending; ties keep first-encountered order in both. Immutable
/// once built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregatedModel {
    pub total: usize,
    pub states: Vec<StateCount>,
    pub groups: Vec<ReportGroup>,
}

/// Outcome of one refresh cycle - the single shared contract every
/// renderer consumes.
///
/// The error state is a variant, not a prose convention: renderers
/// match on it rather than inspecting message text.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedData {
    /// No cycle has completed yet.
    Loading,
    /// The feed parsed as a feature collection. A total of zero is the
    /// explicit "no reports" terminal state, distinct from an error.
    Reports(AggregatedModel),
    /// Valid JSON that is not a feature collection; carries the
    /// pretty-printed body verbatim. Bypasses the pipeline by design.
    Unstructured(String),
    /// Fetch or parse failure, with the failure message.
    Error(String),
}

impl FeedData {
    /// State kind surfaced verbatim by the status endpoints.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedData::Loading => "loading",
            FeedData::Reports(model) if model.total == 0 => "empty",
            FeedData::Reports(_) => "ok",
            FeedData::Unstructured(_) => "unstructured",
            FeedData::Error(_) => "error",
        }
    }
}

/// One published refresh result.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub data: FeedData,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Initial snapshot before the first cycle completes.
    pub fn loading() -> Self {
        Self {
            data: FeedData::Loading,
            fetched_at: Utc::now(),
        }
    }
}

/// Fixed weather-type glyph lookup. Matching is case-insensitive;
/// types outside the table get the default storm glyph.
pub fn weather_emoji(weather_type: &str) -> &'static str {
    match weather_type.to_uppercase().as_str() {
        "RAIN" => "🌧️",
        "SNOW" => "❄️",
        "HAIL" => "🧊",
        "TORNADO" => "🌪️",
        "WIND" => "💨",
        "LIGHTNING" => "⚡",
        "FLOOD" => "🌊",
        "THUNDERSTORM" => "⛈️",
        "FUNNEL" => "🌪️",
        "FREEZING RAIN" => "🧊",
        "SLEET" => "🌨️",
        "BLIZZARD" => "❄️",
        "DUST" => "🌪️",
        "FOG" => "🌫️",
        _ => "🌩️",
    }
}
