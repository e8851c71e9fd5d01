//! Compact card view model, for small display real estate.

use crate::model::FeedData;

/// Header, summary, and count lines - no member detail.
#[derive(Debug, Clone, PartialEq)]
pub struct CompactModel {
    pub header: String,
    pub summary: String,
    /// Per-state count lines, e.g. `IL: 3 reports`.
    pub state_lines: Vec<String>,
    /// Group headers only, e.g. `🧊 HAIL (2)`.
    pub group_lines: Vec<String>,
}

impl CompactModel {
    fn notice(header: &str, summary: impl Into<String>) -> Self {
        Self {
            header: header.to_string(),
            summary: summary.into(),
            state_lines: Vec::new(),
            group_lines: Vec::new(),
        }
    }
}

/// Build the compact view for any feed state.
pub fn compact_model(data: &FeedData) -> CompactModel {
    match data {
        FeedData::Loading => CompactModel::notice("🌤️ Weather Status", "Loading..."),
        FeedData::Error(message) => {
            CompactModel::notice("⚠️ Weather Data Error", message.clone())
        }
        FeedData::Unstructured(_) => {
            CompactModel::notice("📄 Feed Data", "Unrecognized feed format")
        }
        FeedData::Reports(model) if model.total == 0 => {
            CompactModel::notice("🌤️ Weather Status", "All Quiet - No Storm Reports")
        }
        FeedData::Reports(model) => CompactModel {
            header: "🌪️ Storm Reports".to_string(),
            summary: format!("{} reports in the last 2 hours", model.total),
            state_lines: model
                .states
                .iter()
                .map(|entry| {
                    let plural = if entry.count != 1 { "s" } else { "" };
                    format!("{}: {} report{}", entry.state, entry.count, plural)
                })
                .collect(),
            group_lines: model
                .groups
                .iter()
                .map(|group| format!("{} {} ({})", group.emoji, group.weather_type, group.count()))
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::model::StormReport;
    use chrono::{TimeZone, Utc};

    fn report(weather_type: &str, state: &str) -> StormReport {
        StormReport {
            weather_type: weather_type.to_string(),
            state: state.to_string(),
            city: "Peoria".to_string(),
            county: None,
            magnitude: None,
            unit: None,
            time: Utc.with_ymd_and_hms(2024, 6, 1, 19, 30, 0).unwrap(),
            remark: None,
            source: None,
        }
    }

    #[test]
    fn test_counts_only_no_member_detail() {
        let view = compact_model(&FeedData::Reports(aggregate(vec![
            report("HAIL", "IL"),
            report("HAIL", "IL"),
            report("TORNADO", "MO"),
        ])));

        assert_eq!(view.header, "🌪️ Storm Reports");
        assert_eq!(view.summary, "3 reports in the last 2 hours");
        assert_eq!(view.state_lines, vec!["IL: 2 reports", "MO: 1 report"]);
        assert_eq!(view.group_lines, vec!["🧊 HAIL (2)", "🌪️ TORNADO (1)"]);
    }

    #[test]
    fn test_empty_model_is_all_quiet() {
        let view = compact_model(&FeedData::Reports(aggregate(Vec::new())));
        assert_eq!(view.header, "🌤️ Weather Status");
        assert_eq!(view.summary, "All Quiet - No Storm Reports");
        assert!(view.state_lines.is_empty());
        assert!(view.group_lines.is_empty());
    }

    #[test]
    fn test_error_state_has_dedicated_header() {
        let view = compact_model(&FeedData::Error("fetch failed".to_string()));
        assert_eq!(view.header, "⚠️ Weather Data Error");
        assert_eq!(view.summary, "fetch failed");
    }

    #[test]
    fn test_loading_state() {
        let view = compact_model(&FeedData::Loading);
        assert_eq!(view.summary, "Loading...");
    }
}
