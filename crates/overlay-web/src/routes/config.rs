//! Runtime feed configuration endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::state::AppState;

/// Query parameters for the config endpoint.
#[derive(Deserialize)]
pub struct ConfigParams {
    pub url: Option<String>,
}

/// Update the feed URL (with `?url=`) or report the current
/// configuration. A URL change triggers an immediate refresh cycle.
pub async fn config_api(
    State(state): State<AppState>,
    Query(params): Query<ConfigParams>,
) -> Json<Value> {
    match params.url {
        Some(url) => {
            info!(url = %url, "Updating feed URL");
            state.refresher.set_feed_url(url.clone()).await;
            Json(json!({
                "message": "URL updated successfully",
                "newUrl": url,
            }))
        }
        None => Json(json!({
            "message": "Current configuration",
            "apiUrl": state.refresher.current_url().await,
            "refreshInterval": state.refresh_interval_secs,
        })),
    }
}
