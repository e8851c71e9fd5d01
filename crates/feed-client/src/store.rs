//! The atomically-published "current result" snapshot.

use std::sync::Arc;

use report_core::Snapshot;
use tokio::sync::RwLock;

/// Shared holder for the latest published snapshot.
///
/// The refresher builds each new snapshot off to the side and replaces
/// the inner `Arc` in one step; readers clone the `Arc` and work from
/// an immutable snapshot, so they never observe a half-built result
/// and never block on a refresh in progress.
#[derive(Clone)]
pub struct SnapshotStore {
    current: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotStore {
    /// Create a store holding the initial loading snapshot.
    pub fn new() -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(Snapshot::loading()))),
        }
    }

    /// Latest published snapshot.
    pub async fn current(&self) -> Arc<Snapshot> {
        self.current.read().await.clone()
    }

    /// Replace the published snapshot.
    pub async fn publish(&self, snapshot: Snapshot) {
        *self.current.write().await = Arc::new(snapshot);
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use report_core::{AggregatedModel, FeedData};

    #[tokio::test]
    async fn test_store_starts_in_loading_state() {
        let store = SnapshotStore::new();
        assert_eq!(store.current().await.data, FeedData::Loading);
    }

    #[tokio::test]
    async fn test_publish_replaces_the_snapshot_for_all_clones() {
        let store = SnapshotStore::new();
        let reader = store.clone();

        store
            .publish(Snapshot {
                data: FeedData::Reports(AggregatedModel::default()),
                fetched_at: Utc::now(),
            })
            .await;

        assert_eq!(reader.current().await.data.kind(), "empty");
    }

    #[tokio::test]
    async fn test_readers_keep_their_snapshot_across_a_publish() {
        let store = SnapshotStore::new();
        let held = store.current().await;

        store
            .publish(Snapshot {
                data: FeedData::Error("boom".to_string()),
                fetched_at: Utc::now(),
            })
            .await;

        // The old Arc is still the loading snapshot; only new reads
        // see the replacement.
        assert_eq!(held.data, FeedData::Loading);
        assert_eq!(store.current().await.data.kind(), "error");
    }
}
