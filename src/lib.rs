//! # Anime Catalog
//!
//! A small CRUD HTTP API over a catalog of anime entries, with:
//! - A single JSON document as the record store
//! - Lookup by identifier or by name (case-insensitive)
//! - Batch creation applied all-or-nothing
//! - Contiguous identifiers, restored by renumbering after every delete
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │                  (axum, /api/animes)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Catalog Service                             │
//! │        (load → operate → save, per request)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Catalog   │          │    Store    │
//!   │ (in memory) │          │ (JSON file) │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Concurrency
//!
//! Every request reads the whole file and mutating requests overwrite the
//! whole file. With the default `WriteStrategy::Unguarded` nothing
//! coordinates two writers, so concurrent mutations can lose updates.
//! `WriteStrategy::Serialized` runs writers one at a time.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod catalog;
pub mod storage;
pub mod service;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CatalogError, Result};
pub use config::{Config, WriteStrategy};
pub use catalog::{Collection, Entry, IdentifiedEntry};
pub use service::CatalogService;
pub use storage::{JsonFileStore, MemoryStore, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the catalog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
