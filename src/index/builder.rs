//! Index builder: the mutable build phase of an index.

use ahash::AHashMap;
use log::debug;

use crate::analysis::analyzer;
use crate::document::{Document, FieldKind};
use crate::error::{Result, TiliaError};
use crate::index::postings::{DocId, TermPostingIndex};
use crate::index::segment::IndexSegment;
use crate::store::DocumentStore;

/// Statistics about the build phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuilderStats {
    /// Number of documents added.
    pub docs_added: u64,
    /// Number of unique (field, term) pairs indexed.
    pub unique_terms: u64,
    /// Total postings created.
    pub total_postings: u64,
}

/// Accumulates documents into an in-memory inverted index, then seals
/// into an immutable [`IndexSegment`].
///
/// The builder is single-writer: it performs no internal locking, and
/// `&mut self` on every mutation enforces one logical writer at a time.
/// Sealing is the one-way OPEN → SEALED transition; after [`seal`],
/// every mutation fails with [`TiliaError::BuilderSealed`].
///
/// [`seal`]: IndexBuilder::seal
///
/// # Example
///
/// ```
/// use tilia::{Document, IndexBuilder};
///
/// # fn main() -> tilia::Result<()> {
/// let mut builder = IndexBuilder::new();
/// let doc_id = builder.add_document(
///     Document::builder().add_text("body", "hello world").build(),
/// )?;
/// assert_eq!(doc_id, 0);
///
/// let segment = builder.seal()?;
/// assert_eq!(segment.doc_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct IndexBuilder {
    /// In-memory inverted index being built.
    index: TermPostingIndex,

    /// Stored field values being accumulated.
    store: DocumentStore,

    /// Kind of each indexed field, fixed by first use.
    field_kinds: AHashMap<String, FieldKind>,

    /// Document ID counter.
    next_doc_id: DocId,

    /// Whether the builder has been sealed.
    sealed: bool,

    /// Builder statistics.
    stats: BuilderStats,
}

impl IndexBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        IndexBuilder::default()
    }

    /// Add a document, assigning the next sequential document id.
    ///
    /// Each indexed field is analyzed per its kind and its terms are
    /// accumulated into the inverted index; each stored field's raw
    /// value is retained for retrieval. A field indexed with one kind
    /// cannot later be indexed with the other.
    pub fn add_document(&mut self, doc: Document) -> Result<DocId> {
        self.check_sealed()?;

        let doc_id = self.next_doc_id;

        // Validate field kinds up front so a rejected document leaves
        // the accumulators untouched.
        for (name, field) in doc.fields() {
            if !field.indexed {
                continue;
            }
            if let Some(kind) = self.field_kinds.get(name)
                && *kind != field.kind
            {
                return Err(TiliaError::index(format!(
                    "field '{name}' is already indexed as {kind:?}, got {:?}",
                    field.kind
                )));
            }
        }

        self.next_doc_id += 1;
        self.store.ensure(doc_id);

        for (name, field) in doc.fields() {
            if field.indexed {
                self.field_kinds.insert(name.clone(), field.kind);

                let tokens = analyzer::for_kind(field.kind).analyze(&field.value);
                for token in &tokens {
                    let full_term = format!("{name}:{}", token.text);
                    self.index.add_occurrence(&full_term, doc_id);
                    self.stats.total_postings += 1;
                }
            }

            if field.stored {
                self.store.put(doc_id, name, field.value.clone());
            }
        }

        self.stats.docs_added += 1;
        self.stats.unique_terms = self.index.term_count();

        debug!(
            "added document {doc_id} ({} fields, {} unique terms total)",
            doc.len(),
            self.stats.unique_terms
        );

        Ok(doc_id)
    }

    /// Seal the builder into an immutable [`IndexSegment`].
    ///
    /// Posting lists are already ordered by doc id because documents
    /// are added in increasing id order; sealing freezes them as-is.
    /// Sealing twice, or adding documents after sealing, fails with
    /// [`TiliaError::BuilderSealed`].
    pub fn seal(&mut self) -> Result<IndexSegment> {
        self.check_sealed()?;
        self.sealed = true;

        debug!(
            "sealing segment: {} docs, {} unique terms, {} postings",
            self.stats.docs_added, self.stats.unique_terms, self.stats.total_postings
        );

        Ok(IndexSegment::new(
            std::mem::take(&mut self.index),
            std::mem::take(&mut self.store),
            std::mem::take(&mut self.field_kinds),
            self.next_doc_id,
        ))
    }

    /// Get builder statistics.
    pub fn stats(&self) -> &BuilderStats {
        &self.stats
    }

    /// The id the next added document will receive.
    pub fn next_doc_id(&self) -> DocId {
        self.next_doc_id
    }

    /// Whether the builder has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    fn check_sealed(&self) -> Result<()> {
        if self.sealed {
            Err(TiliaError::BuilderSealed)
        } else {
            Ok(())
        }
    }
}
