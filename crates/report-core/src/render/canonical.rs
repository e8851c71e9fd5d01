//! The canonical multi-line text summary.
//!
//! This output is served verbatim on the main overlay page and the
//! JSON data endpoint; its field order and punctuation are a
//! compatibility contract, not an implementation detail.

use std::fmt::Write;

use crate::model::{AggregatedModel, FeedData};

use super::{
    local_time, location_of, magnitude_text, meaningful_remark, notable_source,
    FLASH_FLOOD_REMARK_CAP, REMARK_CAP,
};

/// Fixed text for the empty terminal state.
pub(crate) const NO_REPORTS_TEXT: &str = "No recent storm reports in the past 2 hours.";

/// Render the canonical text for any feed state.
pub fn render_canonical(data: &FeedData) -> String {
    match data {
        FeedData::Loading => "Loading...".to_string(),
        FeedData::Error(message) => format!("Error: {message}"),
        FeedData::Unstructured(json) => json.clone(),
        FeedData::Reports(model) if model.total == 0 => NO_REPORTS_TEXT.to_string(),
        FeedData::Reports(model) => render_model(model),
    }
}

fn render_model(model: &AggregatedModel) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "🌪️ STORM REPORTS - Last 2 Hours");
    let _ = writeln!(text, "Total Reports: {}", model.total);
    text.push('\n');

    let _ = writeln!(text, "📍 REPORTS BY STATE:");
    for entry in &model.states {
        let plural = if entry.count != 1 { "s" } else { "" };
        let _ = writeln!(text, "  {}: {} report{}", entry.state, entry.count, plural);
    }
    text.push('\n');

    for group in &model.groups {
        let _ = writeln!(
            text,
            "{} {} ({}):",
            group.emoji,
            group.weather_type,
            group.count()
        );

        for report in &group.reports {
            let location = location_of(report);
            let time = local_time(&report.time);

            // Flash floods carry their remark inline in place of a
            // magnitude; everything else gets the generic shape.
            let inline_remark = report
                .is_flash_flood()
                .then(|| meaningful_remark(report, FLASH_FLOOD_REMARK_CAP))
                .flatten();

            match inline_remark {
                Some(remark) => {
                    let _ = write!(text, "   {location} ({time}) - {remark}");
                }
                None => {
                    let prefix = magnitude_text(report)
                        .map(|magnitude| format!("{magnitude} - "))
                        .unwrap_or_default();
                    let _ = write!(text, "   {prefix}{location} ({time})");
                }
            }

            if let Some(source) = notable_source(report) {
                let _ = write!(text, " [{source}]");
            }
            text.push('\n');

            if !report.is_flash_flood() {
                if let Some(remark) = meaningful_remark(report, REMARK_CAP) {
                    let _ = writeln!(text, "     {remark}");
                }
            }
        }
        text.push('\n');
    }

    text.trim().to_string()
}
