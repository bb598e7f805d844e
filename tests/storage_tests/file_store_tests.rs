//! JSON File Store Tests
//!
//! Tests verify:
//! - Whole-document load and save
//! - 4-space indented output
//! - Read, parse and write failures map to distinct errors
//! - Creating an empty collection file

use std::path::PathBuf;

use anime_catalog::catalog::{Collection, Entry};
use anime_catalog::storage::{JsonFileStore, Store};
use anime_catalog::CatalogError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("anime.json");
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

fn sample_collection() -> Collection {
    vec![
        Entry::new("Naruto", "Shonen", "2002", "Masashi Kishimoto"),
        Entry::new("Monster", "Thriller", 2004u32, "Naoki Urasawa").with_field("episodios", 74),
    ]
    .into_iter()
    .collect()
}

// =============================================================================
// Load Tests
// =============================================================================

#[tokio::test]
async fn test_load_existing_document() {
    let (_temp, path) = setup_temp_file(
        r#"{"1": {"nombre": "Naruto", "genero": "Shonen", "año": "2002", "autor": "Masashi Kishimoto"}}"#,
    );
    let store = JsonFileStore::new(&path);

    let collection = store.load().await.unwrap();

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get("1").unwrap().name(), Some("Naruto"));
}

#[tokio::test]
async fn test_load_empty_object() {
    let (_temp, path) = setup_temp_file("{}");
    let store = JsonFileStore::new(&path);

    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("missing.json"));

    let result = store.load().await;

    assert!(matches!(result, Err(CatalogError::StorageRead(_))));
}

#[tokio::test]
async fn test_load_garbage_is_parse_error() {
    let (_temp, path) = setup_temp_file("{ not json");
    let store = JsonFileStore::new(&path);

    let result = store.load().await;

    assert!(matches!(result, Err(CatalogError::StorageParse(_))));
}

#[tokio::test]
async fn test_load_non_object_is_parse_error() {
    let (_temp, path) = setup_temp_file("[1, 2, 3]");
    let store = JsonFileStore::new(&path);

    assert!(matches!(store.load().await, Err(CatalogError::StorageParse(_))));
}

// =============================================================================
// Save Tests
// =============================================================================

#[tokio::test]
async fn test_save_then_load() {
    let (_temp, path) = setup_temp_file("{}");
    let store = JsonFileStore::new(&path);
    let collection = sample_collection();

    store.save(&collection).await.unwrap();

    assert_eq!(store.load().await.unwrap(), collection);
}

#[tokio::test]
async fn test_save_uses_four_space_indent() {
    let (_temp, path) = setup_temp_file("{}");
    let store = JsonFileStore::new(&path);
    let collection: Collection = vec![Entry::new("A", "B", "2000", "C")].into_iter().collect();

    store.save(&collection).await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let expected = concat!(
        "{\n",
        "    \"1\": {\n",
        "        \"nombre\": \"A\",\n",
        "        \"genero\": \"B\",\n",
        "        \"año\": \"2000\",\n",
        "        \"autor\": \"C\"\n",
        "    }\n",
        "}"
    );
    assert_eq!(text, expected);
}

#[tokio::test]
async fn test_save_replaces_whole_document() {
    let (_temp, path) = setup_temp_file(r#"{"1": {"nombre": "Old"}, "2": {"nombre": "Gone"}}"#);
    let store = JsonFileStore::new(&path);
    let collection: Collection = vec![Entry::new("New", "B", "2000", "C")].into_iter().collect();

    store.save(&collection).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get("1").unwrap().name(), Some("New"));
}

#[tokio::test]
async fn test_load_then_save_keeps_nulls_and_odd_types() {
    let original = concat!(
        "{\n",
        "    \"1\": {\n",
        "        \"nombre\": 7,\n",
        "        \"genero\": \"Mecha\",\n",
        "        \"año\": null,\n",
        "        \"autor\": true\n",
        "    }\n",
        "}"
    );
    let (_temp, path) = setup_temp_file(original);
    let store = JsonFileStore::new(&path);

    let collection = store.load().await.unwrap();
    store.save(&collection).await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[tokio::test]
async fn test_save_into_missing_directory_is_write_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("nope").join("anime.json"));

    let result = store.save(&sample_collection()).await;

    assert!(matches!(result, Err(CatalogError::StorageWrite(_))));
}

// =============================================================================
// Create-If-Missing Tests
// =============================================================================

#[tokio::test]
async fn test_create_if_missing_writes_empty_collection() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data").join("anime.json");
    let store = JsonFileStore::new(&path);

    assert!(store.create_if_missing().await.unwrap());

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_if_missing_keeps_existing_file() {
    let (_temp, path) = setup_temp_file(r#"{"1": {"nombre": "Keep"}}"#);
    let store = JsonFileStore::new(&path);

    assert!(!store.create_if_missing().await.unwrap());

    assert_eq!(store.load().await.unwrap().len(), 1);
}
