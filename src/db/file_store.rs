// SPDX-License-Identifier: MIT

//! Flat-file record store: one JSON document per `(collection, key)` pair.
//!
//! Records live at `<base>/<collection>/<key>.json` with the serialized
//! record as the entire file content; no envelope, no versioning. Each
//! operation touches exactly one file, and concurrent writers to the same
//! key race (last writer wins). `update` truncates in place, so an
//! interrupted write can leave a partial file behind; callers accept this
//! as a known risk of the format.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

/// Record store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record already exists")]
    AlreadyExists,

    #[error("Record not found")]
    NotFound,

    #[error("Record key {0:?} is not storable")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Handle to the on-disk record store.
#[derive(Clone)]
pub struct FileDb {
    base: PathBuf,
}

impl FileDb {
    /// Open the store rooted at `base`, creating the directory if it does
    /// not exist yet. Collection directories are created lazily on first
    /// write.
    pub async fn open(base: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base = base.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&base).await?;
        Ok(Self { base })
    }

    /// Path of the record file for `(collection, key)`.
    ///
    /// Keys are percent-encoded so arbitrary key strings (phone numbers,
    /// token ids) cannot escape the collection directory.
    fn record_path(&self, collection: &str, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        let file = format!("{}.json", urlencoding::encode(key));
        Ok(self.base.join(collection).join(file))
    }

    /// Store a new record. Fails with [`StoreError::AlreadyExists`] if a
    /// record is already present at that address; never overwrites. The
    /// record is fully written before the call resolves.
    pub async fn create<T: Serialize>(
        &self,
        collection: &str,
        key: &str,
        record: &T,
    ) -> Result<(), StoreError> {
        let path = self.record_path(collection, key)?;
        tokio::fs::create_dir_all(self.base.join(collection)).await?;

        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyExists)
            }
            Err(e) => return Err(e.into()),
        };

        file.write_all(&serde_json::to_vec(record)?).await?;
        file.flush().await?;
        Ok(())
    }

    /// Read and deserialize a record. Absent and unreadable records both
    /// report [`StoreError::NotFound`].
    pub async fn read<T: DeserializeOwned>(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<T, StoreError> {
        let path = self.record_path(collection, key)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|_| StoreError::NotFound)
    }

    /// Replace an existing record in full (truncate-then-write, not a
    /// merge). Fails with [`StoreError::NotFound`] if nothing is stored
    /// at that address.
    pub async fn update<T: Serialize>(
        &self,
        collection: &str,
        key: &str,
        record: &T,
    ) -> Result<(), StoreError> {
        let path = self.record_path(collection, key)?;
        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(e) => return Err(e.into()),
        };

        file.write_all(&serde_json::to_vec(record)?).await?;
        file.flush().await?;
        Ok(())
    }

    /// Delete a record. Fails with [`StoreError::NotFound`] if absent.
    pub async fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        let path = self.record_path(collection, key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
