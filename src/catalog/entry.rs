//! Entry definitions
//!
//! One catalog record and the shape it takes when returned with its id.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{CatalogError, Result};

/// A single anime record
///
/// Fields are kept as the raw JSON the client or the file supplied, in their
/// original order. The four known fields are read through typed getters, so
/// a stored `null` or an unexpected type is written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry {
    fields: Map<String, Value>,
}

impl Entry {
    pub const NAME: &'static str = "nombre";
    pub const GENRE: &'static str = "genero";
    pub const YEAR: &'static str = "año";
    pub const AUTHOR: &'static str = "autor";

    /// Create an entry with all required fields set
    ///
    /// The year stays whatever JSON value it converts to (text or number).
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        year: impl Into<Value>,
        author: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_field(Self::NAME, name.into())
            .with_field(Self::GENRE, genre.into())
            .with_field(Self::YEAR, year)
            .with_field(Self::AUTHOR, author.into())
    }

    /// Set a field, replacing any previous value
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Raw value of any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields in stored order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Name, when stored as text
    pub fn name(&self) -> Option<&str> {
        self.text(Self::NAME)
    }

    /// Genre, when stored as text
    pub fn genre(&self) -> Option<&str> {
        self.text(Self::GENRE)
    }

    /// Year as stored (text, number, or anything else a client sent)
    pub fn year(&self) -> Option<&Value> {
        self.get(Self::YEAR)
    }

    /// Author, when stored as text
    pub fn author(&self) -> Option<&str> {
        self.text(Self::AUTHOR)
    }

    /// Check the fields required for creation
    ///
    /// Each must be present and truthy: not null or false, not empty text,
    /// not zero.
    pub fn validate(&self) -> Result<()> {
        let complete = [Self::NAME, Self::GENRE, Self::YEAR, Self::AUTHOR]
            .iter()
            .all(|key| self.get(key).is_some_and(is_truthy));

        if complete {
            Ok(())
        } else {
            Err(CatalogError::MissingFields)
        }
    }

    /// Shallow merge: every field present in `patch` overwrites ours,
    /// `null` included
    pub fn merge(&mut self, patch: Entry) {
        self.fields.extend(patch.fields);
    }

    /// Case-insensitive name comparison against an already lower-cased query
    pub(crate) fn name_matches(&self, lowered: &str) -> bool {
        self.name().is_some_and(|name| name.to_lowercase() == lowered)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Entry {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// An entry together with its identifier
///
/// Serializes as one flat object with `id` first. A stored field that is
/// itself called `id` replaces the value but keeps that first position.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifiedEntry {
    pub id: String,
    pub entry: Entry,
}

impl IdentifiedEntry {
    pub fn new(id: impl Into<String>, entry: Entry) -> Self {
        Self {
            id: id.into(),
            entry,
        }
    }

    /// Flatten into a single JSON object
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("id".to_string(), Value::String(self.id.clone()));
        object.extend(self.entry.fields.clone());
        Value::Object(object)
    }
}

impl Serialize for IdentifiedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.to_json() {
            Value::Object(object) => object.serialize(serializer),
            _ => Err(S::Error::custom("entry did not flatten to an object")),
        }
    }
}
