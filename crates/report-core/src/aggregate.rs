//! Grouping, counting, and ordering of normalized reports.

use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::model::{weather_emoji, AggregatedModel, ReportGroup, StateCount, StormReport};

/// Build the aggregated model for one refresh cycle.
///
/// Weather-type grouping keys on the exact resolved string - two
/// differently-cased spellings form distinct groups, matching upstream
/// feed variance. The glyph lookup stays case-insensitive regardless.
/// An empty input yields a valid zero-total model, not an error.
pub fn aggregate(reports: Vec<StormReport>) -> AggregatedModel {
    let total = reports.len();

    let mut state_counts: IndexMap<String, usize> = IndexMap::new();
    let mut by_type: IndexMap<String, Vec<StormReport>> = IndexMap::new();

    for report in reports {
        *state_counts.entry(report.state.clone()).or_insert(0) += 1;
        by_type
            .entry(report.weather_type.clone())
            .or_default()
            .push(report);
    }

    // Stable sorts over insertion-ordered maps: ties keep the order of
    // first appearance in the feed.
    let mut states: Vec<StateCount> = state_counts
        .into_iter()
        .map(|(state, count)| StateCount { state, count })
        .collect();
    states.sort_by(|a, b| b.count.cmp(&a.count));

    let mut groups: Vec<ReportGroup> = by_type
        .into_iter()
        .map(|(weather_type, mut reports)| {
            reports.sort_by(compare_members);
            ReportGroup {
                emoji: weather_emoji(&weather_type),
                weather_type,
                reports,
            }
        })
        .collect();
    groups.sort_by(|a, b| b.reports.len().cmp(&a.reports.len()));

    AggregatedModel {
        total,
        states,
        groups,
    }
}

/// Magnitude descending when both sides carry one (time descending as
/// the tiebreak); any comparison where either side lacks a magnitude
/// falls back to time descending. Magnitude and time are never mixed
/// in a single comparison.
fn compare_members(a: &StormReport, b: &StormReport) -> Ordering {
    match (a.magnitude, b.magnitude) {
        (Some(mag_a), Some(mag_b)) => mag_b
            .partial_cmp(&mag_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.time.cmp(&a.time)),
        _ => b.time.cmp(&a.time),
    }
}
