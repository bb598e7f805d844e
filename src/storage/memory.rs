//! In-memory store
//!
//! Keeps the collection behind a RwLock. Loads hand out a clone, saves
//! replace the stored value, so the read-modify-write shape of each request
//! is the same as with the file store.

use parking_lot::RwLock;

use crate::catalog::Collection;
use crate::error::Result;

use super::Store;

/// Collection held in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    collection: RwLock<Collection>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `collection`
    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection: RwLock::new(collection),
        }
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Collection {
        self.collection.read().clone()
    }
}

impl Store for MemoryStore {
    async fn load(&self) -> Result<Collection> {
        Ok(self.collection.read().clone())
    }

    async fn save(&self, collection: &Collection) -> Result<()> {
        *self.collection.write() = collection.clone();
        Ok(())
    }
}
