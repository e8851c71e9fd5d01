//! Timer-driven refresh cycle: fetch → normalize → aggregate → publish.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use report_core::{aggregate, normalize, render_canonical, FeedData, FeedPayload, Snapshot};
use tokio::sync::{mpsc, RwLock};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use crate::client::FeedClient;
use crate::store::SnapshotStore;

/// Characters of canonical text logged after a successful cycle.
const LOG_PREVIEW_CHARS: usize = 200;

/// Shared view of the configured feed URL.
///
/// The serving layer can swap the URL at runtime; the refresher reads
/// it at the start of every cycle.
#[derive(Clone)]
pub struct FeedSource {
    url: Arc<RwLock<String>>,
}

impl FeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Arc::new(RwLock::new(url.into())),
        }
    }

    pub async fn get(&self) -> String {
        self.url.read().await.clone()
    }

    pub async fn set(&self, url: impl Into<String>) {
        *self.url.write().await = url.into();
    }
}

/// Control handle exposed to the serving layer.
#[derive(Clone)]
pub struct RefresherHandle {
    source: FeedSource,
    refresh_tx: mpsc::Sender<()>,
}

impl RefresherHandle {
    /// Replace the feed URL and trigger an immediate refresh cycle.
    pub async fn set_feed_url(&self, url: impl Into<String>) {
        self.source.set(url).await;
        self.refresh_now().await;
    }

    /// Trigger an out-of-schedule refresh cycle.
    pub async fn refresh_now(&self) {
        // A full queue means a refresh is already pending.
        let _ = self.refresh_tx.try_send(());
    }

    /// Currently configured feed URL.
    pub async fn current_url(&self) -> String {
        self.source.get().await
    }
}

/// Drives the refresh loop and owns the store's writer side.
pub struct Refresher {
    client: FeedClient,
    store: SnapshotStore,
    source: FeedSource,
    refresh_interval: Duration,
    refresh_rx: mpsc::Receiver<()>,
    /// Keeps the request channel open even if every handle is dropped.
    _refresh_tx: mpsc::Sender<()>,
}

impl Refresher {
    /// Create a refresher and its control handle.
    pub fn new(
        client: FeedClient,
        store: SnapshotStore,
        source: FeedSource,
        refresh_interval: Duration,
    ) -> (Self, RefresherHandle) {
        let (refresh_tx, refresh_rx) = mpsc::channel(1);
        let handle = RefresherHandle {
            source: source.clone(),
            refresh_tx: refresh_tx.clone(),
        };

        (
            Self {
                client,
                store,
                source,
                refresh_interval,
                refresh_rx,
                _refresh_tx: refresh_tx,
            },
            handle,
        )
    }

    /// Run the refresh loop: one cycle immediately, then on every tick
    /// or on-demand request. Never returns.
    ///
    /// Cycles run to completion inside this task, so they cannot
    /// overlap; a tick that fires while a cycle is still running is
    /// skipped rather than queued behind it.
    pub async fn run(mut self) {
        let mut ticker = interval(self.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(interval = ?self.refresh_interval, "Starting feed refresher");

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = self.refresh_rx.recv() => {}
            }
            self.run_cycle().await;
        }
    }

    /// One complete cycle. Failures publish an explicit error snapshot;
    /// nothing here is fatal to the loop.
    async fn run_cycle(&self) {
        let url = self.source.get().await;
        info!(url = %url, "Fetching storm reports");

        let data = match self.client.fetch(&url).await {
            Ok(FeedPayload::Reports(records)) => FeedData::Reports(aggregate(normalize(records))),
            Ok(FeedPayload::Unstructured(json)) => FeedData::Unstructured(json),
            Err(err) => {
                error!("Feed refresh failed: {}", err);
                FeedData::Error(err.to_string())
            }
        };

        match &data {
            FeedData::Reports(model) => {
                let preview: String = render_canonical(&data)
                    .chars()
                    .take(LOG_PREVIEW_CHARS)
                    .collect();
                info!(total = model.total, "Feed updated: {}", preview);
            }
            FeedData::Unstructured(_) => info!("Feed updated with an unstructured payload"),
            _ => {}
        }

        self.store
            .publish(Snapshot {
                data,
                fetched_at: Utc::now(),
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_feed_source_swap_is_visible_to_all_clones() {
        let source = FeedSource::new("http://example.com/a.json");
        let clone = source.clone();

        source.set("http://example.com/b.json").await;
        assert_eq!(clone.get().await, "http://example.com/b.json");
    }

    #[tokio::test]
    async fn test_handle_set_feed_url_updates_source_and_queues_refresh() {
        let client = FeedClient::new().unwrap();
        let store = SnapshotStore::new();
        let source = FeedSource::new("http://example.com/a.json");
        let (mut refresher, handle) = Refresher::new(
            client,
            store,
            source,
            Duration::from_secs(60),
        );

        handle.set_feed_url("http://example.com/b.json").await;

        assert_eq!(handle.current_url().await, "http://example.com/b.json");
        assert!(refresher.refresh_rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_repeat_refresh_requests_collapse_into_one() {
        let client = FeedClient::new().unwrap();
        let store = SnapshotStore::new();
        let source = FeedSource::new("http://example.com/a.json");
        let (mut refresher, handle) =
            Refresher::new(client, store, source, Duration::from_secs(60));

        handle.refresh_now().await;
        handle.refresh_now().await;
        handle.refresh_now().await;

        assert!(refresher.refresh_rx.try_recv().is_ok());
        assert!(refresher.refresh_rx.try_recv().is_err());
    }
}
