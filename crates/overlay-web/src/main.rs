//! OBS overlay server for near-real-time storm reports.
//!
//! Polls the configured feed on a background timer and serves the
//! canonical text, ticker, compact, and dashboard views for OBS
//! browser sources.

mod config;
mod routes;
mod state;

use feed_client::{FeedClient, FeedConfig, FeedSource, Refresher, SnapshotStore};
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    let feed_config = FeedConfig::from_env();
    info!(addr = %config.addr, feed = %feed_config.url, "Starting overlay server");

    // Background refresher: fetch → normalize → aggregate → publish
    let client = FeedClient::new()?;
    let store = SnapshotStore::new();
    let source = FeedSource::new(feed_config.url.clone());
    let (refresher, handle) = Refresher::new(
        client,
        store.clone(),
        source,
        feed_config.refresh_interval,
    );
    tokio::spawn(refresher.run());

    // Build application state and router
    let state = AppState::new(store, handle, feed_config.refresh_interval.as_secs());
    let app = routes::router().with_state(state);

    info!(addr = %config.addr, "Overlay server listening");
    info!("OBS browser sources: / (text), /ticker, /compact, /dashboard");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
