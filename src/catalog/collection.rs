//! Collection implementation
//!
//! IndexMap-based id -> entry mapping with the catalog's key ordering.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Entry, IdentifiedEntry};

/// The full set of entries keyed by decimal string identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    entries: IndexMap<String, Entry>,
}

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Literal key lookup
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Iterate `(id, entry)` pairs in collection order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Identifiers in collection order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// First entry whose name equals `name` ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<IdentifiedEntry> {
        let lowered = name.to_lowercase();
        self.entries
            .iter()
            .find(|(_, entry)| entry.name_matches(&lowered))
            .map(|(id, entry)| IdentifiedEntry::new(id.clone(), entry.clone()))
    }

    /// Identifier the next created entry receives
    ///
    /// Relies on the collection being contiguous 1..len.
    pub fn next_id(&self) -> u64 {
        self.entries.len() as u64 + 1
    }

    /// Append a batch, assigning `next_id()`, `next_id() + 1`, ... in order
    ///
    /// Returns the identifiers that were assigned.
    pub fn append(&mut self, batch: Vec<Entry>) -> Vec<String> {
        let first = self.next_id();
        let ids: Vec<String> = (first..first + batch.len() as u64)
            .map(|id| id.to_string())
            .collect();

        for (id, entry) in ids.iter().zip(batch) {
            self.entries.insert(id.clone(), entry);
        }
        self.normalize();

        ids
    }

    /// Shallow-merge `patch` into the entry stored under `id`
    pub fn merge(&mut self, id: &str, patch: Entry) -> Option<&Entry> {
        let entry = self.entries.get_mut(id)?;
        entry.merge(patch);
        Some(&*entry)
    }

    /// Remove `id` and re-key every remaining entry 1..len in current order
    ///
    /// Old identifiers are discarded entirely: the entry that followed the
    /// removed one takes over its identifier, and so on down the list.
    pub fn remove_and_renumber(&mut self, id: &str) -> Option<Entry> {
        let removed = self.entries.shift_remove(id)?;

        let remaining = std::mem::take(&mut self.entries);
        self.entries = remaining
            .into_values()
            .enumerate()
            .map(|(index, entry)| ((index + 1).to_string(), entry))
            .collect();

        Some(removed)
    }

    /// True when the identifiers are exactly "1" through "len"
    pub fn is_contiguous(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(index, id)| *id == (index + 1).to_string())
    }

    /// Restore the key ordering: integer keys ascending, others after them
    /// in insertion order (stable sort)
    fn normalize(&mut self) {
        self.entries
            .sort_by(|a, _, b, _| ordering_key(a).cmp(&ordering_key(b)));
    }
}

/// Integer keys sort first by value; everything else shares one bucket
fn ordering_key(key: &str) -> (bool, u32) {
    match array_index(key) {
        Some(index) => (false, index),
        None => (true, 0),
    }
}

/// Canonical integer key: no sign, no leading zeros, below u32::MAX
fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}

impl From<IndexMap<String, Entry>> for Collection {
    fn from(entries: IndexMap<String, Entry>) -> Self {
        let mut collection = Self { entries };
        collection.normalize();
        collection
    }
}

impl FromIterator<(String, Entry)> for Collection {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<IndexMap<_, _>>())
    }
}

impl FromIterator<Entry> for Collection {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.append(iter.into_iter().collect());
        collection
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, Entry>::deserialize(deserializer).map(Self::from)
    }
}
