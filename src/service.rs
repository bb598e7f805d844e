//! Service Module
//!
//! The catalog operations behind the HTTP routes.
//!
//! ## Responsibilities
//! - Load the collection fresh for every operation
//! - Apply lookups and mutations in memory
//! - Save the whole collection after a successful mutation
//!
//! Every operation is a self-contained read-modify-write. Nothing is cached
//! between calls.

use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};

use crate::catalog::{Collection, Entry, IdentifiedEntry};
use crate::config::WriteStrategy;
use crate::error::{CatalogError, Result};
use crate::storage::Store;

/// Catalog operations over an injected store
///
/// ## Concurrency Model
///
/// - **Reads** (get/find/list): never locked
/// - **Writes** (create/update/delete) under `WriteStrategy::Unguarded`:
///   no lock. Two writers can interleave their load/save and one update
///   is lost.
/// - **Writes** under `WriteStrategy::Serialized`: `write_lock` is held
///   from load through save, so writers run one at a time
pub struct CatalogService<S> {
    /// Durable storage for the collection
    store: S,

    /// How writers coordinate
    strategy: WriteStrategy,

    /// Serializes writes when the strategy asks for it
    write_lock: Mutex<()>,
}

impl<S: Store> CatalogService<S> {
    /// Create a service with the default (unguarded) write strategy
    pub fn new(store: S) -> Self {
        Self::with_strategy(store, WriteStrategy::default())
    }

    pub fn with_strategy(store: S, strategy: WriteStrategy) -> Self {
        Self {
            store,
            strategy,
            write_lock: Mutex::new(()),
        }
    }

    /// Get an entry by its identifier
    pub async fn get_by_id(&self, id: &str) -> Result<IdentifiedEntry> {
        let collection = self.load().await?;

        let entry = collection
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::id_not_found(id))?;

        Ok(IdentifiedEntry::new(id, entry))
    }

    /// Get the first entry whose name matches, ignoring case
    pub async fn get_by_name(&self, name: &str) -> Result<IdentifiedEntry> {
        let collection = self.load().await?;

        collection
            .find_by_name(name)
            .ok_or_else(|| CatalogError::name_not_found(name))
    }

    /// The whole collection as stored
    pub async fn list(&self) -> Result<Collection> {
        self.load().await
    }

    /// Create one entry (JSON object) or a batch (JSON array of objects)
    ///
    /// All-or-nothing: one invalid element rejects the batch before anything
    /// is written. Returns the created entries as submitted.
    pub async fn create(&self, payload: Value) -> Result<Vec<Entry>> {
        let _guard = self.write_guard().await;
        let mut collection = self.load().await?;
        let batch = parse_batch(payload)?;

        let ids = collection.append(batch.clone());
        self.save(&collection).await?;

        tracing::debug!(count = ids.len(), ids = ?ids, "Created entries");
        Ok(batch)
    }

    /// Shallow-merge `patch` into the entry stored under `id`
    ///
    /// Any JSON object is accepted. A field set to `null` stores `null`.
    pub async fn update(&self, id: &str, patch: Value) -> Result<Entry> {
        let _guard = self.write_guard().await;
        let mut collection = self.load().await?;

        if collection.get(id).is_none() {
            return Err(CatalogError::id_not_found(id));
        }
        let patch: Entry = serde_json::from_value(patch)
            .map_err(|e| CatalogError::InvalidPayload(e.to_string()))?;

        let updated = collection
            .merge(id, patch)
            .cloned()
            .ok_or_else(|| CatalogError::id_not_found(id))?;
        self.save(&collection).await?;

        tracing::debug!(id, "Updated entry");
        Ok(updated)
    }

    /// Delete the entry under `id` and renumber the rest 1..N
    pub async fn delete(&self, id: &str) -> Result<Collection> {
        let _guard = self.write_guard().await;
        let mut collection = self.load().await?;

        collection
            .remove_and_renumber(id)
            .ok_or_else(|| CatalogError::id_not_found(id))?;
        self.save(&collection).await?;

        tracing::debug!(id, remaining = collection.len(), "Deleted entry and renumbered");
        Ok(collection)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn write_guard(&self) -> Option<MutexGuard<'_, ()>> {
        match self.strategy {
            WriteStrategy::Unguarded => None,
            WriteStrategy::Serialized => Some(self.write_lock.lock().await),
        }
    }

    async fn load(&self) -> Result<Collection> {
        self.store.load().await.inspect_err(|e| {
            tracing::warn!(error = %e, cause = ?std::error::Error::source(e), "Failed to load collection");
        })
    }

    async fn save(&self, collection: &Collection) -> Result<()> {
        self.store.save(collection).await.inspect_err(|e| {
            tracing::warn!(error = %e, cause = ?std::error::Error::source(e), "Failed to save collection");
        })
    }
}

/// Accept a single object or an array of objects; validate every element
fn parse_batch(payload: Value) -> Result<Vec<Entry>> {
    let items = match payload {
        Value::Array(items) => items,
        single => vec![single],
    };

    items
        .into_iter()
        .map(|item| {
            let entry: Entry =
                serde_json::from_value(item).map_err(|_| CatalogError::MissingFields)?;
            entry.validate()?;
            Ok(entry)
        })
        .collect()
}
