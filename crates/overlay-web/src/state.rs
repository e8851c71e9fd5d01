//! Application state shared across handlers.

use std::time::Instant;

use feed_client::{RefresherHandle, SnapshotStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Latest published feed snapshot.
    pub store: SnapshotStore,
    /// Control handle for the background refresher.
    pub refresher: RefresherHandle,
    /// Configured refresh interval in seconds, reported by `/config`.
    pub refresh_interval_secs: u64,
    /// Process start time, for the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        store: SnapshotStore,
        refresher: RefresherHandle,
        refresh_interval_secs: u64,
    ) -> Self {
        Self {
            store,
            refresher,
            refresh_interval_secs,
            started_at: Instant::now(),
        }
    }
}
