//! Searcher implementation for executing queries against segments.

use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

use crate::analysis::analyzer;
use crate::error::Result;
use crate::index::postings::DocId;
use crate::index::segment::IndexSegment;
use crate::query::ast::Query;
use crate::search::collector::TopDocsCollector;
use crate::search::{SearchHit, SearchResults};

/// Executes queries against one or more sealed segments.
///
/// Segments are immutable, so a searcher borrows nothing mutably and
/// any number of searches may run concurrently over the same segments.
///
/// With multiple segments, each segment's local doc ids are offset by
/// the cumulative doc count of the segments before it, so hit ids stay
/// unique across the whole searcher.
///
/// # Scoring
///
/// Deterministic TF-IDF: for term `t` in field `f` of a segment with
/// `N` documents of which `df` contain the term,
/// `idf = ln(1 + N / df)`, and a document's score is the sum of
/// `tf * idf` over all query terms present in it. Equal scores rank by
/// lower doc id first. Exact score values are engine-defined; only the
/// ordering is contractual.
#[derive(Debug, Clone)]
pub struct Searcher {
    segments: Vec<Arc<IndexSegment>>,
    load_documents: bool,
}

impl Searcher {
    /// Create a searcher over a single segment.
    pub fn new(segment: Arc<IndexSegment>) -> Self {
        Searcher::over(vec![segment])
    }

    /// Create a searcher over several segments.
    pub fn over(segments: Vec<Arc<IndexSegment>>) -> Self {
        Searcher {
            segments,
            load_documents: true,
        }
    }

    /// Set whether hits carry their stored fields (default: true).
    pub fn load_documents(mut self, load_documents: bool) -> Self {
        self.load_documents = load_documents;
        self
    }

    /// Total document count across all segments.
    pub fn doc_count(&self) -> u64 {
        self.segments.iter().map(|s| s.doc_count()).sum()
    }

    /// Execute a search, returning at most `limit` hits, best first.
    ///
    /// A query whose terms match nothing — including terms against
    /// fields the segments never indexed — returns empty results, not
    /// an error.
    pub fn search(&self, query: &Query, limit: usize) -> Result<SearchResults> {
        let scores = self.match_scores(query);

        let mut collector = TopDocsCollector::new(limit);
        for (&doc_id, &score) in &scores {
            collector.collect(doc_id, score);
        }
        let total_hits = collector.total_hits();
        let mut hits = collector.into_hits();

        if self.load_documents {
            self.attach_documents(&mut hits);
        }

        let max_score = hits.iter().map(|hit| hit.score).fold(0.0f32, f32::max);

        debug!(
            "search over {} segment(s) matched {total_hits} doc(s)",
            self.segments.len()
        );

        Ok(SearchResults {
            hits,
            total_hits,
            max_score,
        })
    }

    /// Count documents matching the query, without ranking or loading.
    pub fn count(&self, query: &Query) -> Result<u64> {
        Ok(self.match_scores(query).len() as u64)
    }

    /// Accumulate TF-IDF scores for every matching document.
    ///
    /// Iteration over clauses and segments is in declaration order, so
    /// per-document float summation order is fixed and results are
    /// reproducible.
    fn match_scores(&self, query: &Query) -> AHashMap<DocId, f32> {
        let mut scores: AHashMap<DocId, f32> = AHashMap::new();

        let mut doc_base: DocId = 0;
        for segment in &self.segments {
            let doc_count = segment.doc_count();

            for term_query in query.terms() {
                // Unknown field: contributes no matches.
                let Some(kind) = segment.field_kind(&term_query.field) else {
                    continue;
                };

                // Analyze the raw query term with the field's analyzer so
                // normalization matches index time.
                for token in analyzer::for_kind(kind).analyze(&term_query.term) {
                    let Some(list) = segment.postings(&term_query.field, &token.text) else {
                        continue;
                    };

                    let idf = (1.0 + doc_count as f32 / list.doc_frequency as f32).ln();
                    for posting in list.iter() {
                        *scores.entry(doc_base + posting.doc_id).or_insert(0.0) +=
                            posting.term_freq as f32 * idf;
                    }
                }
            }

            doc_base += doc_count;
        }

        scores
    }

    /// Load stored fields into hits.
    fn attach_documents(&self, hits: &mut [SearchHit]) {
        for hit in hits {
            if let Some((segment, local_id)) = self.segment_for(hit.doc_id) {
                hit.document = segment.document(local_id).cloned();
            }
        }
    }

    /// Resolve a searcher-wide doc id to its segment and local id.
    fn segment_for(&self, doc_id: DocId) -> Option<(&IndexSegment, DocId)> {
        let mut doc_base: DocId = 0;
        for segment in &self.segments {
            let next_base = doc_base + segment.doc_count();
            if doc_id < next_base {
                return Some((segment, doc_id - doc_base));
            }
            doc_base = next_base;
        }
        None
    }
}
