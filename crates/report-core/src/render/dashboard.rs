//! Statistics dashboard view model.

use crate::model::{FeedData, StormReport};

use super::{
    local_time, location_of, magnitude_text, meaningful_remark, notable_source,
    FLASH_FLOOD_REMARK_CAP, REMARK_CAP,
};

/// Label for the feed's fixed reporting window.
const WINDOW_LABEL: &str = "Last 2 Hours";

/// Summary statistics plus per-group detail cards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    /// Failure message when the last cycle errored; the page renders a
    /// dedicated error card instead of the statistics.
    pub error: Option<String>,
    /// Non-error standby note (loading, unstructured passthrough).
    pub notice: Option<String>,
    pub total_reports: usize,
    pub states_affected: usize,
    pub weather_types: usize,
    pub window_label: &'static str,
    pub groups: Vec<DashboardGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardGroup {
    pub emoji: &'static str,
    pub weather_type: String,
    pub count: usize,
    pub cards: Vec<DashboardCard>,
}

/// One report's detail card.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCard {
    pub location: String,
    pub time: String,
    pub magnitude: Option<String>,
    pub details: Option<String>,
    pub source: Option<String>,
}

impl DashboardModel {
    fn standby(notice: Option<&str>) -> Self {
        Self {
            error: None,
            notice: notice.map(str::to_string),
            total_reports: 0,
            states_affected: 0,
            weather_types: 0,
            window_label: WINDOW_LABEL,
            groups: Vec::new(),
        }
    }
}

/// Build the dashboard view for any feed state.
pub fn dashboard_model(data: &FeedData) -> DashboardModel {
    match data {
        FeedData::Loading => DashboardModel::standby(Some("Loading storm reports...")),
        FeedData::Unstructured(_) => DashboardModel::standby(Some(
            "Feed returned an unrecognized format; raw data is on the main view.",
        )),
        FeedData::Error(message) => DashboardModel {
            error: Some(message.clone()),
            ..DashboardModel::standby(None)
        },
        FeedData::Reports(model) => DashboardModel {
            error: None,
            notice: None,
            total_reports: model.total,
            states_affected: model.states.len(),
            weather_types: model.groups.len(),
            window_label: WINDOW_LABEL,
            groups: model
                .groups
                .iter()
                .map(|group| DashboardGroup {
                    emoji: group.emoji,
                    weather_type: group.weather_type.clone(),
                    count: group.count(),
                    cards: group.reports.iter().map(card).collect(),
                })
                .collect(),
        },
    }
}

fn card(report: &StormReport) -> DashboardCard {
    let cap = if report.is_flash_flood() {
        FLASH_FLOOD_REMARK_CAP
    } else {
        REMARK_CAP
    };

    DashboardCard {
        location: location_of(report),
        time: local_time(&report.time),
        magnitude: magnitude_text(report),
        details: meaningful_remark(report, cap).map(str::to_string),
        source: notable_source(report).map(str::to_string),
    }
}
