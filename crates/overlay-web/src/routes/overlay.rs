//! Main overlay page and the JSON data endpoint.

use askama::Template;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use report_core::{render_canonical, FeedData, DISPLAY_TZ};

use crate::state::AppState;

/// Main overlay page template.
#[derive(Template)]
#[template(path = "overlay.html")]
pub struct OverlayTemplate {
    pub text: String,
    pub error: bool,
    pub last_updated: String,
}

/// Payload for the JSON data endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    pub data: String,
    pub last_updated: String,
    pub status: &'static str,
}

/// Render the main overlay page.
pub async fn overlay_page(State(state): State<AppState>) -> OverlayTemplate {
    let snapshot = state.store.current().await;

    OverlayTemplate {
        text: render_canonical(&snapshot.data),
        error: matches!(snapshot.data, FeedData::Error(_)),
        last_updated: snapshot
            .fetched_at
            .with_timezone(&DISPLAY_TZ)
            .format("%b %-d, %Y, %I:%M:%S %p")
            .to_string(),
    }
}

/// Latest canonical text as JSON, with the snapshot's state kind.
pub async fn data_api(State(state): State<AppState>) -> Json<DataResponse> {
    let snapshot = state.store.current().await;

    Json(DataResponse {
        data: render_canonical(&snapshot.data),
        last_updated: snapshot.fetched_at.to_rfc3339(),
        status: snapshot.data.kind(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_marks_error_state() {
        let template = OverlayTemplate {
            text: "Error: fetch failed".to_string(),
            error: true,
            last_updated: "Jun 1, 2024, 02:30:00 PM".to_string(),
        };

        let html = template.render().unwrap();
        assert!(html.contains("data-content error"));
        assert!(html.contains("Error: fetch failed"));
    }

    #[test]
    fn test_page_escapes_feed_text() {
        let template = OverlayTemplate {
            text: "<script>alert(1)</script>".to_string(),
            error: false,
            last_updated: "Jun 1, 2024, 02:30:00 PM".to_string(),
        };

        let html = template.render().unwrap();
        assert!(!html.contains("<script>alert"));
    }
}
