//! Text analysis module for Tilia.
//!
//! Analysis turns raw field text into the normalized terms that get
//! indexed and queried. There are exactly two analysis behaviors,
//! matching the two [`FieldKind`](crate::document::FieldKind) variants:
//!
//! - [`StandardAnalyzer`]: lowercases and splits on non-alphanumeric
//!   boundaries — for prose TEXT fields.
//! - [`KeywordAnalyzer`]: the whole input becomes exactly one term,
//!   untouched — for identifier-like KEYWORD fields.
//!
//! Analyzers are stateless values passed explicitly to both the index
//! builder and the searcher, so the same normalization is applied on
//! both sides of a query.
//!
//! # Examples
//!
//! ```
//! use tilia::analysis::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer;
//! let tokens = analyzer.analyze("Hello, World!");
//! let terms: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(terms, vec!["hello", "world"]);
//! ```

pub mod analyzer;
pub mod token;

// Re-exports
pub use analyzer::{Analyzer, KeywordAnalyzer, StandardAnalyzer, for_kind};
pub use token::Token;
