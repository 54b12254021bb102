//! Client-side synchronization engine for the admin dashboard.
//!
//! [`SyncEngine`] owns the one dashboard snapshot per client, reconciles it
//! with the remote store through a [`DashboardApi`], persists it write-through
//! to a [`KeyValueStore`], and retries refreshes over transient network loss.

pub mod api;
pub mod engine;
pub mod error;
pub mod events;
pub mod retry;
pub mod snapshot_cache;
pub mod state;
pub mod store;
pub mod token_store;

#[cfg(test)]
mod tests;

pub use api::DashboardApi;
pub use engine::SyncEngine;
pub use error::{StoreError, StoreResult, SyncError, SyncResult};
pub use events::{EventSink, LogEventSink, RecordingSink, SyncEvent};
pub use retry::{IsRetryable, RetryError, RetryPolicy, with_retry};
pub use snapshot_cache::{SNAPSHOT_KEY, SnapshotCache};
pub use state::{StateKind, SyncState};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use token_store::{TOKEN_KEY, TokenStore};
