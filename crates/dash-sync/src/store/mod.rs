mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::StoreResult;

use async_trait::async_trait;

/// Durable string storage keyed by short names.
///
/// Implementations must survive process restart to be useful as a cache,
/// but the engine treats every read failure as "nothing stored".
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a key that is not present succeeds.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}

pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
