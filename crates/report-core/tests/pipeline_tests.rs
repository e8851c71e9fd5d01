//! End-to-end pipeline tests: raw feed body → parse → normalize →
//! aggregate → every renderer.
//!
//! Run with:
//!   cargo test --test pipeline_tests

use report_core::{
    aggregate, compact_model, dashboard_model, normalize, parse_feed, render_canonical,
    ticker_items, FeedData, FeedPayload,
};

/// Build a feature collection body from raw property objects.
fn feed_body(properties: &[serde_json::Value]) -> String {
    let features: Vec<serde_json::Value> = properties
        .iter()
        .map(|props| serde_json::json!({"type": "Feature", "properties": props}))
        .collect();
    serde_json::json!({"type": "FeatureCollection", "features": features}).to_string()
}

/// Run the whole pipeline on a feed body.
fn pipeline(body: &str) -> FeedData {
    match parse_feed(body).expect("feed body must be valid JSON") {
        FeedPayload::Reports(records) => FeedData::Reports(aggregate(normalize(records))),
        FeedPayload::Unstructured(json) => FeedData::Unstructured(json),
    }
}

fn hail(magnitude: &str, valid: &str) -> serde_json::Value {
    serde_json::json!({
        "typetext": "HAIL",
        "st": "IL",
        "city": "Peoria",
        "magnitude": magnitude,
        "unit": "Inch",
        "valid": valid,
    })
}

// ============================================================================
// Scenario tests
// ============================================================================

#[test]
fn scenario_zero_features() {
    let data = pipeline(&feed_body(&[]));

    assert_eq!(
        render_canonical(&data),
        "No recent storm reports in the past 2 hours."
    );

    let items = ticker_items(&data);
    assert_eq!(items.len(), 1);
    assert!(items[0].text.contains("All quiet"));

    let dashboard = dashboard_model(&data);
    assert_eq!(dashboard.total_reports, 0);
    assert_eq!(dashboard.states_affected, 0);

    assert_eq!(data.kind(), "empty");
}

#[test]
fn scenario_two_hail_reports_ordered_by_magnitude() {
    let data = pipeline(&feed_body(&[
        hail("0.75", "2024-06-01T19:00:00Z"),
        hail("1.5", "2024-06-01T18:00:00Z"),
    ]));

    let text = render_canonical(&data);
    assert!(text.contains("  IL: 2 reports"));

    let FeedData::Reports(model) = &data else {
        panic!("expected a report model");
    };
    assert_eq!(model.groups.len(), 1);
    let magnitudes: Vec<Option<f64>> =
        model.groups[0].reports.iter().map(|r| r.magnitude).collect();
    assert_eq!(magnitudes, vec![Some(1.5), Some(0.75)]);
}

#[test]
fn scenario_flash_flood_remark_inline_everywhere() {
    let data = pipeline(&feed_body(&[serde_json::json!({
        "typetext": "FLASH FLOOD",
        "st": "MO",
        "city": "Columbia",
        "remark": "Water rescue in progress near downtown.",
        "valid": "2024-06-01T19:00:00Z",
    })]));

    let text = render_canonical(&data);
    assert!(text.contains("- Water rescue in progress near downtown."));

    let items = ticker_items(&data);
    assert!(items[0].text.contains("Water rescue in progress"));
    assert!(!items[0].text.contains("Reported in"));
    assert!(items[0].significant);
}

#[test]
fn scenario_null_remark_absent_in_every_view() {
    let data = pipeline(&feed_body(&[serde_json::json!({
        "typetext": "HAIL",
        "st": "IL",
        "city": "Peoria",
        "magnitude": "1.25",
        "unit": "Inch",
        "remark": "NULL",
        "valid": "2024-06-01T19:00:00Z",
    })]));

    assert!(!render_canonical(&data).to_lowercase().contains("null"));
    assert!(!ticker_items(&data)[0].text.to_lowercase().contains("null"));

    let dashboard = dashboard_model(&data);
    assert_eq!(dashboard.groups[0].cards[0].details, None);
}

#[test]
fn scenario_fetch_failure_is_consistent_across_views() {
    let data = FeedData::Error("Request failed: connect timeout".to_string());

    assert!(render_canonical(&data).starts_with("Error: "));

    let items = ticker_items(&data);
    assert_eq!(items[0].label, "⚠️ ERROR");

    let compact = compact_model(&data);
    assert_eq!(compact.header, "⚠️ Weather Data Error");

    let dashboard = dashboard_model(&data);
    assert!(dashboard.error.is_some());

    assert_eq!(data.kind(), "error");
}

// ============================================================================
// Property tests
// ============================================================================

#[test]
fn total_counts_exclude_only_timestamp_failures() {
    let data = pipeline(&feed_body(&[
        hail("1.0", "2024-06-01T19:00:00Z"),
        hail("1.0", "not a timestamp"),
        serde_json::json!({"typetext": "TORNADO", "valid": "2024-06-01T18:30:00Z"}),
        serde_json::json!({"valid": "2024-06-01T18:00:00Z"}),
    ]));

    let FeedData::Reports(model) = &data else {
        panic!("expected a report model");
    };
    // The bad timestamp drops one record; missing type/state do not.
    assert_eq!(model.total, 3);

    let group_sum: usize = model.groups.iter().map(|g| g.reports.len()).sum();
    let state_sum: usize = model.states.iter().map(|s| s.count).sum();
    assert_eq!(group_sum, model.total);
    assert_eq!(state_sum, model.total);
}

#[test]
fn views_agree_with_canonical_on_totals_and_grouping() {
    let data = pipeline(&feed_body(&[
        hail("1.75", "2024-06-01T19:00:00Z"),
        hail("0.5", "2024-06-01T18:45:00Z"),
        serde_json::json!({
            "typetext": "TSTM WND GST",
            "st": "MO",
            "city": "Columbia",
            "magnitude": 62,
            "unit": "Mph",
            "valid": "2024-06-01T18:30:00Z",
        }),
    ]));

    let FeedData::Reports(model) = &data else {
        panic!("expected a report model");
    };

    let canonical = render_canonical(&data);
    assert!(canonical.contains(&format!("Total Reports: {}", model.total)));

    // One ticker item per report.
    assert_eq!(ticker_items(&data).len(), model.total);

    // Compact shows every group header with the same counts.
    let compact = compact_model(&data);
    assert_eq!(compact.group_lines.len(), model.groups.len());
    for (line, group) in compact.group_lines.iter().zip(&model.groups) {
        assert!(line.contains(&format!("({})", group.reports.len())));
    }

    // Dashboard cards cover every report, stats match the model.
    let dashboard = dashboard_model(&data);
    assert_eq!(dashboard.total_reports, model.total);
    assert_eq!(dashboard.weather_types, model.groups.len());
    assert_eq!(dashboard.states_affected, model.states.len());
    let card_sum: usize = dashboard.groups.iter().map(|g| g.cards.len()).sum();
    assert_eq!(card_sum, model.total);
}

#[test]
fn aggregation_is_idempotent() {
    let records = match parse_feed(&feed_body(&[
        hail("1.0", "2024-06-01T19:00:00Z"),
        hail("0.5", "2024-06-01T18:00:00Z"),
        serde_json::json!({"typetext": "TORNADO", "st": "KS", "city": "Salina", "valid": "2024-06-01T17:00:00Z"}),
    ]))
    .unwrap()
    {
        FeedPayload::Reports(records) => records,
        other => panic!("expected reports, got {:?}", other),
    };

    let reports = normalize(records);
    assert_eq!(aggregate(reports.clone()), aggregate(reports));
}

#[test]
fn unstructured_feed_bypasses_the_pipeline() {
    let data = pipeline(r#"{"observations": [1, 2, 3]}"#);

    let FeedData::Unstructured(json) = &data else {
        panic!("expected passthrough");
    };
    assert!(json.contains("observations"));
    assert_eq!(render_canonical(&data), *json);
    assert_eq!(data.kind(), "unstructured");
}
