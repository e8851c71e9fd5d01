//! Renderers over the published feed data.
//!
//! Every view consumes [`crate::model::FeedData`] directly; none of
//! them re-parse another renderer's output, so the views can never
//! disagree on counts or grouping.

mod canonical;
mod compact;
mod dashboard;
mod ticker;

pub use canonical::render_canonical;
pub use compact::{compact_model, CompactModel};
pub use dashboard::{dashboard_model, DashboardCard, DashboardGroup, DashboardModel};
pub use ticker::{ticker_items, TickerItem};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::model::StormReport;

/// Display timezone for all rendered timestamps.
pub const DISPLAY_TZ: Tz = chrono_tz::America::Chicago;

/// Remark length cap when shown inline on a flash-flood line.
pub(crate) const FLASH_FLOOD_REMARK_CAP: usize = 300;

/// Remark length cap for the indented remark under other types.
pub(crate) const REMARK_CAP: usize = 200;

/// Sources too routine to call out on a report line.
const DEFAULT_SOURCES: [&str; 2] = ["Mesonet", "ASOS"];

pub(crate) fn local_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&DISPLAY_TZ).format("%I:%M %p").to_string()
}

/// `city, county County, state` - the county is skipped when the city
/// text already names it.
pub(crate) fn location_of(report: &StormReport) -> String {
    let mut location = report.city.clone();
    if let Some(county) = &report.county {
        if !report.city.contains(county.as_str()) {
            if !location.is_empty() {
                location.push_str(", ");
            }
            location.push_str(county);
            location.push_str(" County");
        }
    }
    if !location.is_empty() {
        location.push_str(", ");
    }
    location.push_str(&report.state);
    location
}

/// `{magnitude}{unit}`, e.g. `1.75Inch`, when a numeric magnitude is
/// present. The unit is simply omitted when absent.
pub(crate) fn magnitude_text(report: &StormReport) -> Option<String> {
    let value = report.magnitude?;
    let mut text = format_magnitude(value);
    if let Some(unit) = &report.unit {
        text.push_str(unit);
    }
    Some(text)
}

fn format_magnitude(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub(crate) fn notable_source(report: &StormReport) -> Option<&str> {
    report
        .source
        .as_deref()
        .filter(|source| !DEFAULT_SOURCES.contains(source))
}

/// A remark worth showing: present (the normalizer already dropped
/// `"null"` literals), under the cap, and not a 24-hour summary dump.
pub(crate) fn meaningful_remark(report: &StormReport, cap: usize) -> Option<&str> {
    report
        .remark
        .as_deref()
        .filter(|remark| remark.len() < cap && !remark.contains("24-hour"))
}
