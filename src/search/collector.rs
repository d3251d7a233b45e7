//! Result collection for searches.

use std::cmp::Ordering;

use crate::index::postings::DocId;
use crate::search::SearchHit;

/// Collects scored documents and keeps the best `limit` of them.
///
/// Ranking is total: score descending, then doc id ascending, so equal
/// scores always come out in the same order and results are
/// reproducible run to run.
#[derive(Debug)]
pub struct TopDocsCollector {
    limit: usize,
    entries: Vec<(DocId, f32)>,
}

impl TopDocsCollector {
    /// Create a collector keeping at most `limit` hits.
    pub fn new(limit: usize) -> Self {
        TopDocsCollector {
            limit,
            entries: Vec::new(),
        }
    }

    /// Collect one scored document.
    pub fn collect(&mut self, doc_id: DocId, score: f32) {
        self.entries.push((doc_id, score));
    }

    /// Total number of documents collected, before the limit.
    pub fn total_hits(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Finish collection: sort, truncate to the limit, and return hits.
    pub fn into_hits(mut self) -> Vec<SearchHit> {
        self.entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        self.entries.truncate(self.limit);
        self.entries
            .into_iter()
            .map(|(doc_id, score)| SearchHit {
                doc_id,
                score,
                document: None,
            })
            .collect()
    }
}
