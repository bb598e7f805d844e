//! Storage Module
//!
//! Durable home of the collection.
//!
//! ## Responsibilities
//! - Load the whole collection at the start of a request
//! - Replace the whole collection at the end of a mutating request
//!
//! Handlers only see the `Store` capability, so a locked or transactional
//! backend can replace the JSON file without touching request logic.
//!
//! ## File Format
//! ```text
//! {
//!     "1": { "nombre": "...", "genero": "...", "año": "...", "autor": "..." },
//!     "2": { ... }
//! }
//! ```
//! One JSON object, keys are decimal identifiers, written with 4-space
//! indentation. Reads and writes always cover the whole document.

mod file;
mod memory;

use std::future::Future;

use crate::catalog::Collection;
use crate::error::Result;

pub use file::{encode_collection, JsonFileStore};
pub use memory::MemoryStore;

/// Whole-collection load/save capability
pub trait Store: Send + Sync + 'static {
    /// Read the complete collection
    fn load(&self) -> impl Future<Output = Result<Collection>> + Send;

    /// Replace the complete collection
    fn save(&self, collection: &Collection) -> impl Future<Output = Result<()>> + Send;
}
