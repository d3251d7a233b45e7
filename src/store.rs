//! Document store: retrievable field values per document id.
//!
//! The store is populated by the index builder for fields marked
//! `stored`, then frozen into the sealed segment alongside the inverted
//! index. Document ids are dense and 0-based, so the store is a plain
//! vector indexed by id.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::index::postings::DocId;

/// Stored field values for a single document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    fields: AHashMap<String, String>,
}

impl StoredDocument {
    /// Get a stored field value by name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|v| v.as_str())
    }

    /// Iterate over all stored fields.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &String)> {
        self.fields.iter()
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no stored fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn insert(&mut self, field: String, value: String) {
        self.fields.insert(field, value);
    }
}

/// Holds stored field values for every document in a segment.
///
/// Every added document has an entry, even when none of its fields are
/// stored, so `len()` always equals the builder's document count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStore {
    docs: Vec<StoredDocument>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        DocumentStore { docs: Vec::new() }
    }

    /// Ensure an entry exists for `doc_id`, growing the store as needed.
    pub(crate) fn ensure(&mut self, doc_id: DocId) {
        while self.docs.len() <= doc_id as usize {
            self.docs.push(StoredDocument::default());
        }
    }

    /// Retain a stored field value under `doc_id`.
    pub(crate) fn put(&mut self, doc_id: DocId, field: &str, value: String) {
        self.ensure(doc_id);
        self.docs[doc_id as usize].insert(field.to_string(), value);
    }

    /// Get a stored field value.
    pub fn get(&self, doc_id: DocId, field: &str) -> Option<&str> {
        self.docs.get(doc_id as usize).and_then(|doc| doc.get(field))
    }

    /// Get all stored fields for a document.
    pub fn document(&self, doc_id: DocId) -> Option<&StoredDocument> {
        self.docs.get(doc_id as usize)
    }

    /// Number of documents in the store.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
