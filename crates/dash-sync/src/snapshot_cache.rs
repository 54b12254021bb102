use crate::{EventSink, KeyValueStore, StoreError, StoreResult, SyncEvent};

use dash_core::DashboardSnapshot;

use std::sync::Arc;

/// Storage key of the persisted snapshot
pub const SNAPSHOT_KEY: &str = "dashboard_data";

/// Serializes the dashboard snapshot into a [`KeyValueStore`].
///
/// Loading is forgiving: a missing, unreadable or unparseable entry yields
/// `None` and the engine starts from an empty snapshot.
#[derive(Clone)]
pub struct SnapshotCache {
    store: Arc<dyn KeyValueStore>,
    events: Arc<dyn EventSink>,
}

impl SnapshotCache {
    pub fn new(store: Arc<dyn KeyValueStore>, events: Arc<dyn EventSink>) -> Self {
        Self { store, events }
    }

    pub async fn load(&self) -> Option<DashboardSnapshot> {
        let contents = match self.store.get(SNAPSHOT_KEY).await {
            Ok(Some(contents)) => contents,
            Ok(None) => return None,
            Err(e) => {
                self.events.emit(SyncEvent::CacheReadFailed {
                    error: e.to_string(),
                });
                return None;
            }
        };

        match serde_json::from_str::<DashboardSnapshot>(&contents) {
            Ok(snapshot) => {
                self.events.emit(SyncEvent::CacheLoaded {
                    users: snapshot.users.len(),
                });
                Some(snapshot)
            }
            Err(e) => {
                self.events.emit(SyncEvent::CacheCorrupted {
                    error: e.to_string(),
                });
                None
            }
        }
    }

    pub async fn save(&self, snapshot: &DashboardSnapshot) -> StoreResult<()> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| StoreError::serialization(SNAPSHOT_KEY, e))?;
        self.store.set(SNAPSHOT_KEY, &json).await
    }
}
