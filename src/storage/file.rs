//! JSON file store
//!
//! Reads and overwrites a single JSON document. There is no locking here:
//! two writers racing on the same file end with whichever wrote last.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::io::AsyncWriteExt;

use crate::catalog::Collection;
use crate::error::{CatalogError, Result};

use super::Store;

/// Collection persisted as one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use the document at `path`; the file is expected to exist already
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty collection (`{}`) unless the file already exists
    ///
    /// Creates missing parent directories. Returns `true` when a new file
    /// was written.
    pub async fn create_if_missing(&self) -> Result<bool> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(CatalogError::StorageWrite)?;
        }

        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(CatalogError::StorageWrite(e)),
        };

        let bytes = encode_collection(&Collection::new())
            .map_err(|e| CatalogError::StorageWrite(io::Error::other(e)))?;
        file.write_all(&bytes)
            .await
            .map_err(CatalogError::StorageWrite)?;
        file.flush().await.map_err(CatalogError::StorageWrite)?;

        Ok(true)
    }
}

impl Store for JsonFileStore {
    async fn load(&self) -> Result<Collection> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(CatalogError::StorageRead)?;

        serde_json::from_slice(&bytes).map_err(CatalogError::StorageParse)
    }

    async fn save(&self, collection: &Collection) -> Result<()> {
        let bytes = encode_collection(collection)
            .map_err(|e| CatalogError::StorageWrite(io::Error::other(e)))?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(CatalogError::StorageWrite)
    }
}

/// Serialize a collection the way it is stored on disk (4-space indent)
pub fn encode_collection(collection: &Collection) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    collection.serialize(&mut serializer)?;
    Ok(buf)
}
