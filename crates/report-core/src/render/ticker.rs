//! Scrolling-ticker view model.

use crate::model::{FeedData, StormReport};

use super::{
    local_time, location_of, magnitude_text, meaningful_remark, notable_source,
    FLASH_FLOOD_REMARK_CAP,
};

/// Hail size at or above this many inches is called out.
const HAIL_SIGNIFICANT: f64 = 1.0;
/// Wind speed at or above this many mph is called out.
const WIND_SIGNIFICANT: f64 = 60.0;
/// Rainfall at or above this many inches is called out.
const RAIN_SIGNIFICANT: f64 = 1.0;

/// One entry in the scrolling ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerItem {
    /// Badge text, e.g. `🧊 HAIL`.
    pub label: String,
    pub text: String,
    /// Flags the item for breaking-news styling.
    pub significant: bool,
}

impl TickerItem {
    fn notice(label: &str, text: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            text: text.into(),
            significant: false,
        }
    }
}

/// Build the ticker items for any feed state. Never returns an empty
/// sequence - every state has an explicit single-item rendering.
pub fn ticker_items(data: &FeedData) -> Vec<TickerItem> {
    match data {
        FeedData::Loading => vec![TickerItem::notice("🌤️ WEATHER", "Loading storm reports...")],
        FeedData::Error(message) => vec![TickerItem::notice("⚠️ ERROR", message.clone())],
        FeedData::Unstructured(_) => vec![TickerItem::notice(
            "📄 FEED",
            "Unrecognized feed format - raw data on the main view",
        )],
        FeedData::Reports(model) if model.total == 0 => vec![TickerItem::notice(
            "🌤️ WEATHER",
            "No storm reports in the last 2 hours - All quiet!",
        )],
        FeedData::Reports(model) => {
            let items: Vec<TickerItem> = model
                .groups
                .iter()
                .flat_map(|group| {
                    group
                        .reports
                        .iter()
                        .map(|report| report_item(group.emoji, &group.weather_type, report))
                })
                .collect();

            if items.is_empty() {
                // Defensive: a non-empty model always has groups, but a
                // bare count beats empty markup if that ever breaks.
                return vec![TickerItem::notice(
                    "🌪️ WEATHER",
                    format!("{} storm reports in the last 2 hours", model.total),
                )];
            }
            items
        }
    }
}

fn report_item(emoji: &str, weather_type: &str, report: &StormReport) -> TickerItem {
    let location = location_of(report);
    let time = local_time(&report.time);

    let mut text = if let Some(remark) = report
        .is_flash_flood()
        .then(|| meaningful_remark(report, FLASH_FLOOD_REMARK_CAP))
        .flatten()
    {
        format!("{location} at {time} - {remark}")
    } else if let Some(magnitude) = magnitude_text(report) {
        format!("{magnitude} reported in {location} at {time}")
    } else {
        format!("Reported in {location} at {time}")
    };

    if let Some(source) = notable_source(report) {
        text.push_str(&format!(" [{source}]"));
    }

    TickerItem {
        label: format!("{} {}", emoji, weather_type.to_uppercase()),
        text,
        significant: is_significant(report),
    }
}

/// Severity flag: tornado and flood types always; magnitude-bearing
/// hail, wind, and rain above their thresholds.
fn is_significant(report: &StormReport) -> bool {
    let weather_type = report.weather_type.to_uppercase();
    if weather_type.contains("TORNADO") || weather_type.contains("FLOOD") {
        return true;
    }

    let Some(magnitude) = report.magnitude else {
        return false;
    };
    if weather_type.contains("HAIL") {
        magnitude >= HAIL_SIGNIFICANT
    } else if weather_type.contains("WIND") || weather_type.contains("WND") {
        magnitude >= WIND_SIGNIFICANT
    } else if weather_type.contains("RAIN") {
        magnitude >= RAIN_SIGNIFICANT
    } else {
        false
    }
}
