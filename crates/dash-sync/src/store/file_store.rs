use crate::store::{KeyValueStore, is_valid_key};
use crate::{StoreError, StoreResult};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// One file per key under a single directory.
///
/// Writes go to a temp file that is synced and then renamed over the target,
/// so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        if !is_valid_key(key) {
            return Err(StoreError::invalid_key(key));
        }
        Ok(self.dir.join(key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, path, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::io(key, self.dir.clone(), e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::io(key, temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .await
                .map_err(|e| StoreError::io(key, temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StoreError::io(key, temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                warn!("Failed to remove temp file {temp_path:?}: {cleanup}");
            }
            return Err(StoreError::io(key, final_path, e));
        }

        debug!("Stored '{key}' ({} bytes)", value.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, path, e)),
        }
    }
}
