//! Posting lists for the in-memory inverted index.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Document identifier: 0-based, dense, assigned at insertion time,
/// never reused.
pub type DocId = u64;

/// A single entry in a posting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// The document containing the term.
    pub doc_id: DocId,

    /// Raw term frequency within the field.
    pub term_freq: u32,
}

/// Postings for one (field, term) pair.
///
/// Doc ids are strictly increasing. Documents are added in ascending id
/// order, so appending preserves the invariant without re-sorting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostingList {
    /// The postings, ordered by ascending doc id.
    pub postings: Vec<Posting>,

    /// Number of documents containing the term.
    pub doc_frequency: u64,

    /// Total occurrences of the term across all documents.
    pub total_frequency: u64,
}

impl PostingList {
    /// Create an empty posting list.
    pub fn new() -> Self {
        PostingList::default()
    }

    /// Record one occurrence of the term in `doc_id`.
    ///
    /// A repeated id bumps the frequency of the tail posting; a new id
    /// appends. Callers must feed doc ids in non-decreasing order.
    pub fn add_occurrence(&mut self, doc_id: DocId) {
        debug_assert!(self.postings.last().is_none_or(|p| p.doc_id <= doc_id));
        match self.postings.last_mut() {
            Some(last) if last.doc_id == doc_id => {
                last.term_freq += 1;
            }
            _ => {
                self.postings.push(Posting {
                    doc_id,
                    term_freq: 1,
                });
                self.doc_frequency += 1;
            }
        }
        self.total_frequency += 1;
    }

    /// Iterate over the postings in doc id order.
    pub fn iter(&self) -> impl Iterator<Item = &Posting> {
        self.postings.iter()
    }

    /// Number of postings (equals `doc_frequency`).
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether the list has no postings.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// In-memory map from full term (`"field:term"`) to its posting list.
#[derive(Debug, Clone, Default)]
pub struct TermPostingIndex {
    lists: AHashMap<String, PostingList>,
}

impl TermPostingIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        TermPostingIndex::default()
    }

    /// Record one occurrence of `full_term` in `doc_id`.
    pub fn add_occurrence(&mut self, full_term: &str, doc_id: DocId) {
        if let Some(list) = self.lists.get_mut(full_term) {
            list.add_occurrence(doc_id);
        } else {
            let mut list = PostingList::new();
            list.add_occurrence(doc_id);
            self.lists.insert(full_term.to_string(), list);
        }
    }

    /// Get the posting list for a full term.
    pub fn get_posting_list(&self, full_term: &str) -> Option<&PostingList> {
        self.lists.get(full_term)
    }

    /// Number of unique terms in the index.
    pub fn term_count(&self) -> u64 {
        self.lists.len() as u64
    }

    /// Total number of postings across all terms.
    pub fn posting_count(&self) -> u64 {
        self.lists.values().map(|list| list.doc_frequency).sum()
    }

    /// Iterate over all full terms.
    pub fn terms(&self) -> impl Iterator<Item = &String> {
        self.lists.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_list_ordering_invariant() {
        let mut list = PostingList::new();
        list.add_occurrence(0);
        list.add_occurrence(0);
        list.add_occurrence(2);
        list.add_occurrence(5);

        let ids: Vec<DocId> = list.iter().map(|p| p.doc_id).collect();
        assert_eq!(ids, vec![0, 2, 5]);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_posting_list_frequencies() {
        let mut list = PostingList::new();
        list.add_occurrence(1);
        list.add_occurrence(1);
        list.add_occurrence(1);
        list.add_occurrence(4);

        assert_eq!(list.doc_frequency, 2);
        assert_eq!(list.total_frequency, 4);
        assert_eq!(list.postings[0].term_freq, 3);
        assert_eq!(list.postings[1].term_freq, 1);
    }

    #[test]
    fn test_term_posting_index() {
        let mut index = TermPostingIndex::new();
        index.add_occurrence("body:rust", 0);
        index.add_occurrence("body:rust", 1);
        index.add_occurrence("body:fast", 1);

        assert_eq!(index.term_count(), 2);
        assert_eq!(index.posting_count(), 3);

        let list = index.get_posting_list("body:rust").unwrap();
        assert_eq!(list.doc_frequency, 2);
        assert!(index.get_posting_list("body:zebra").is_none());
    }
}
