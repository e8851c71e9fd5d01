//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: String,
    pub uptime: u64,
    pub last_updated: String,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let snapshot = state.store.current().await;

    Json(Health {
        status: "healthy".to_string(),
        uptime: state.started_at.elapsed().as_secs(),
        last_updated: snapshot.fetched_at.to_rfc3339(),
    })
}
