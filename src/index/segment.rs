//! Immutable index segments.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::document::FieldKind;
use crate::error::{Result, TiliaError};
use crate::index::postings::{DocId, PostingList, TermPostingIndex};
use crate::store::{DocumentStore, StoredDocument};

/// Metadata about a sealed segment.
///
/// This is the shape an external persistence layer must round-trip,
/// together with the postings and stored values themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentInfo {
    /// Number of documents in the segment.
    pub doc_count: u64,

    /// Maximum document id, if the segment is non-empty.
    pub max_doc_id: Option<DocId>,

    /// Number of unique (field, term) pairs.
    pub unique_terms: u64,

    /// Total number of postings.
    pub total_postings: u64,
}

/// An immutable, queryable snapshot of an inverted index plus its
/// document store.
///
/// A segment is produced by [`IndexBuilder::seal`] and never mutated
/// afterwards. It is `Send + Sync`; any number of searchers may read it
/// concurrently without synchronization, and no read blocks another.
///
/// [`IndexBuilder::seal`]: crate::index::builder::IndexBuilder::seal
#[derive(Debug)]
pub struct IndexSegment {
    index: TermPostingIndex,
    store: DocumentStore,
    field_kinds: AHashMap<String, FieldKind>,
    doc_count: u64,
}

impl IndexSegment {
    pub(crate) fn new(
        index: TermPostingIndex,
        store: DocumentStore,
        field_kinds: AHashMap<String, FieldKind>,
        doc_count: u64,
    ) -> Self {
        IndexSegment {
            index,
            store,
            field_kinds,
            doc_count,
        }
    }

    /// Total number of documents in the segment.
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// The kind a field was indexed with, if the field has postings.
    pub fn field_kind(&self, field: &str) -> Option<FieldKind> {
        self.field_kinds.get(field).copied()
    }

    /// Get the posting list for a term in a field.
    ///
    /// Returns `None` for unknown fields and absent terms alike; this
    /// is the permissive lookup searches use.
    pub fn postings(&self, field: &str, term: &str) -> Option<&PostingList> {
        self.index.get_posting_list(&format!("{field}:{term}"))
    }

    /// Strict variant of [`postings`](IndexSegment::postings): an
    /// unknown field is a typed error, an absent term is `Ok(None)`.
    pub fn postings_strict(&self, field: &str, term: &str) -> Result<Option<&PostingList>> {
        if !self.field_kinds.contains_key(field) {
            return Err(TiliaError::FieldNotIndexed(field.to_string()));
        }
        Ok(self.postings(field, term))
    }

    /// Get a stored field value for a document.
    pub fn stored(&self, doc_id: DocId, field: &str) -> Option<&str> {
        self.store.get(doc_id, field)
    }

    /// Get all stored fields for a document.
    pub fn document(&self, doc_id: DocId) -> Option<&StoredDocument> {
        self.store.document(doc_id)
    }

    /// Segment metadata.
    pub fn info(&self) -> SegmentInfo {
        SegmentInfo {
            doc_count: self.doc_count,
            max_doc_id: self.doc_count.checked_sub(1),
            unique_terms: self.index.term_count(),
            total_postings: self.index.posting_count(),
        }
    }
}
