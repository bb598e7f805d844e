//! Catalog Module
//!
//! In-memory data model for the anime collection.
//!
//! ## Responsibilities
//! - Entries that keep every stored field verbatim, with typed getters
//! - Identifier assignment for batch creation
//! - Case-insensitive name lookup
//! - Renumbering after deletion (identifiers stay contiguous 1..N)
//!
//! ## Key Ordering
//! Identifiers are decimal strings. Keys that are canonical integers
//! ("1", "2", ... without leading zeros) iterate in ascending numeric order,
//! any other key follows them in insertion order. The order is established
//! when a collection is built or loaded, so "first match" and "current order"
//! mean the same thing everywhere.

mod collection;
mod entry;

pub use collection::Collection;
pub use entry::{Entry, IdentifiedEntry};
