//! File-based Key-Value Store Adapter
//!
//! Stores each value in its own file. Key segments map to directories, so
//! `session:<id>` lands at `{base_dir}/session/<id>.json`.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::ports::{key_segments, KeyValueStore, StorageError};

/// Filesystem-backed key-value storage
#[derive(Debug, Clone)]
pub struct JsonFileKeyValueStore {
    base_dir: PathBuf,
}

impl JsonFileKeyValueStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let segments = key_segments(key)?;
        let (last, dirs) = segments
            .split_last()
            .ok_or_else(|| StorageError::InvalidKey(key.to_string()))?;

        let mut path = self.base_dir.clone();
        for dir in dirs {
            path.push(dir);
        }
        path.push(format!("{}.json", last));
        Ok(path)
    }
}

#[async_trait]
impl KeyValueStore for JsonFileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.file_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("Failed to read {}: {}", path.display(), e))),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.file_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(format!("Failed to create directory: {}", e)))?;
        }

        // Write to a unique temporary file, then rename into place
        let temp_path = path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        fs::write(&temp_path, value)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to write temporary file: {}", e)))?;

        if let Err(e) = fs::rename(&temp_path, &path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::Io(format!("Failed to rename file: {}", e)));
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.file_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(format!("Failed to delete file: {}", e))),
        }
    }
}
