//! Memory Store Tests

use anime_catalog::catalog::{Collection, Entry};
use anime_catalog::storage::{MemoryStore, Store};

#[tokio::test]
async fn test_new_store_is_empty() {
    let store = MemoryStore::new();
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_replaces_contents() {
    let store = MemoryStore::new();
    let collection: Collection = vec![Entry::new("A", "B", "2000", "C")].into_iter().collect();

    store.save(&collection).await.unwrap();

    assert_eq!(store.load().await.unwrap(), collection);
    assert_eq!(store.snapshot(), collection);
}

#[tokio::test]
async fn test_loaded_copy_is_detached() {
    let seed: Collection = vec![Entry::new("A", "B", "2000", "C")].into_iter().collect();
    let store = MemoryStore::with_collection(seed.clone());

    let mut loaded = store.load().await.unwrap();
    loaded.remove_and_renumber("1");

    // Nothing changes until save
    assert_eq!(store.snapshot(), seed);
}
