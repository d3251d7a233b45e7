//! Search execution over sealed segments.
//!
//! [`searcher::Searcher`] evaluates a parsed [`Query`](crate::Query)
//! against one or more sealed segments, scoring matches with a
//! deterministic TF-IDF variant and collecting the best hits through
//! [`collector::TopDocsCollector`].

pub mod collector;
pub mod searcher;

use serde::{Deserialize, Serialize};

use crate::index::postings::DocId;
use crate::store::StoredDocument;

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matching document's id. With multiple segments open, ids
    /// are offset by per-segment bases so they stay unique.
    pub doc_id: DocId,

    /// The document's relevance score.
    pub score: f32,

    /// Stored field values, when document loading is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<StoredDocument>,
}

/// Ranked results of a search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// The hits, best first, at most `limit` of them.
    pub hits: Vec<SearchHit>,

    /// Total number of matching documents, before the limit.
    pub total_hits: u64,

    /// Highest score among the hits, 0.0 when there are none.
    pub max_score: f32,
}

pub use searcher::Searcher;
