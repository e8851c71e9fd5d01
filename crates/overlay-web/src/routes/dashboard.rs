//! Statistics dashboard view.

use askama::Template;
use axum::extract::State;

use report_core::{dashboard_model, DashboardModel, DISPLAY_TZ};

use crate::state::AppState;

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub model: DashboardModel,
    pub last_updated: String,
}

/// Render the statistics dashboard page.
pub async fn dashboard_page(State(state): State<AppState>) -> DashboardTemplate {
    let snapshot = state.store.current().await;

    DashboardTemplate {
        model: dashboard_model(&snapshot.data),
        last_updated: snapshot
            .fetched_at
            .with_timezone(&DISPLAY_TZ)
            .format("%I:%M:%S %p")
            .to_string(),
    }
}
