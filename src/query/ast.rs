//! Query tree types.

/// A single-term query against one field.
///
/// The term is kept raw; the searcher analyzes it with the analyzer for
/// the target field's kind, so KEYWORD fields stay case-exact while
/// TEXT fields fold the same way they did at index time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermQuery {
    /// The field to search.
    pub field: String,

    /// The raw query term.
    pub term: String,
}

impl TermQuery {
    /// Create a new term query.
    pub fn new<F: Into<String>, T: Into<String>>(field: F, term: T) -> Self {
        TermQuery {
            field: field.into(),
            term: term.into(),
        }
    }
}

/// A parsed query tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Match documents containing the term in the field.
    Term(TermQuery),

    /// Union of sub-queries; scores of documents matching several
    /// clauses are summed.
    Or(Vec<Query>),
}

impl Query {
    /// Collect all term clauses in the tree, left to right.
    pub fn terms(&self) -> Vec<&TermQuery> {
        let mut out = Vec::new();
        self.collect_terms(&mut out);
        out
    }

    fn collect_terms<'a>(&'a self, out: &mut Vec<&'a TermQuery>) {
        match self {
            Query::Term(term) => out.push(term),
            Query::Or(clauses) => {
                for clause in clauses {
                    clause.collect_terms(out);
                }
            }
        }
    }
}
