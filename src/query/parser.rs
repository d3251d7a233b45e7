//! Parser for the `field:term` query string syntax.

use crate::error::{Result, TiliaError};
use crate::query::ast::{Query, TermQuery};

/// Parses query strings into [`Query`] trees.
///
/// Grammar: one or more whitespace-separated clauses, each either a
/// bare term (searched in the default field) or `field:term`. Multiple
/// clauses are implicitly OR'ed.
///
/// # Example
///
/// ```
/// use tilia::QueryParser;
///
/// let parser = QueryParser::new("body");
/// let query = parser.parse("cat title:pets").unwrap();
/// assert_eq!(query.terms().len(), 2);
///
/// assert!(parser.parse("").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct QueryParser {
    default_field: String,
}

impl QueryParser {
    /// Create a parser with the given default field.
    pub fn new<S: Into<String>>(default_field: S) -> Self {
        QueryParser {
            default_field: default_field.into(),
        }
    }

    /// The field bare terms are searched in.
    pub fn default_field(&self) -> &str {
        &self.default_field
    }

    /// Parse a query string.
    ///
    /// Fails with [`TiliaError::QuerySyntax`] on empty or blank input,
    /// and on malformed clauses (`:term`, `field:`).
    pub fn parse(&self, query_text: &str) -> Result<Query> {
        let mut clauses = Vec::new();

        for raw in query_text.split_whitespace() {
            let clause = match raw.split_once(':') {
                Some((field, term)) => {
                    if field.is_empty() {
                        return Err(TiliaError::query(format!(
                            "clause '{raw}' is missing a field name"
                        )));
                    }
                    if term.is_empty() {
                        return Err(TiliaError::query(format!(
                            "clause '{raw}' is missing a term"
                        )));
                    }
                    TermQuery::new(field, term)
                }
                None => TermQuery::new(self.default_field.clone(), raw),
            };
            clauses.push(Query::Term(clause));
        }

        match clauses.len() {
            0 => Err(TiliaError::query("empty query")),
            1 => Ok(clauses.swap_remove(0)),
            _ => Ok(Query::Or(clauses)),
        }
    }
}
