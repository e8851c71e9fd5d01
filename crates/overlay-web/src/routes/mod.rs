//! Route handlers for the overlay server.

pub mod compact;
pub mod config;
pub mod dashboard;
pub mod health;
pub mod overlay;
pub mod ticker;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML views
        .route("/", get(overlay::overlay_page))
        .route("/ticker", get(ticker::ticker_page))
        .route("/compact", get(compact::compact_page))
        .route("/dashboard", get(dashboard::dashboard_page))
        // JSON surface
        .route("/api/data", get(overlay::data_api))
        .route("/config", get(config::config_api))
        .route("/health", get(health::health))
}
