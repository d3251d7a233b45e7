//! Query parsing and the query tree.
//!
//! The query language is deliberately small: one or more
//! whitespace-separated terms, each optionally prefixed with `field:`,
//! implicitly OR'ed. [`parser::QueryParser`] turns a query string into
//! a [`ast::Query`] tree; the searcher evaluates the tree against
//! sealed segments.

pub mod ast;
pub mod parser;

pub use ast::{Query, TermQuery};
pub use parser::QueryParser;
