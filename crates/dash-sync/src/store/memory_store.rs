use crate::store::{KeyValueStore, is_valid_key};
use crate::{StoreError, StoreResult};

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local store; contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if !is_valid_key(key) {
            return Err(StoreError::invalid_key(key));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if !is_valid_key(key) {
            return Err(StoreError::invalid_key(key));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        if !is_valid_key(key) {
            return Err(StoreError::invalid_key(key));
        }
        self.entries.write().await.remove(key);
        Ok(())
    }
}
