//! Compact card view.

use askama::Template;
use axum::extract::State;

use report_core::{compact_model, CompactModel, DISPLAY_TZ};

use crate::state::AppState;

/// Compact page template.
#[derive(Template)]
#[template(path = "compact.html")]
pub struct CompactTemplate {
    pub view: CompactModel,
    pub last_updated: String,
}

/// Render the compact card page.
pub async fn compact_page(State(state): State<AppState>) -> CompactTemplate {
    let snapshot = state.store.current().await;

    CompactTemplate {
        view: compact_model(&snapshot.data),
        last_updated: snapshot
            .fetched_at
            .with_timezone(&DISPLAY_TZ)
            .format("%I:%M:%S %p")
            .to_string(),
    }
}
