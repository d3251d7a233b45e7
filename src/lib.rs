//! # Tilia
//!
//! A minimal, single-node, in-memory full-text search library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Analyzed TEXT fields and exact-value KEYWORD fields
//! - Build-then-seal index lifecycle with immutable segments
//! - Deterministic TF-IDF ranking
//! - Simple `field:term` query strings
//!
//! ## Overview
//!
//! Indexing follows a strict build-then-seal lifecycle: documents are fed
//! into an [`IndexBuilder`], which accumulates postings and stored field
//! values in memory. Sealing the builder produces an immutable
//! [`IndexSegment`] that any number of [`Searcher`]s can read concurrently.
//!
//! ```
//! use std::sync::Arc;
//! use tilia::{Document, IndexBuilder, QueryParser, Searcher};
//!
//! # fn main() -> tilia::Result<()> {
//! let mut builder = IndexBuilder::new();
//! builder.add_document(
//!     Document::builder()
//!         .add_text("body", "Rust is a systems programming language")
//!         .build(),
//! )?;
//! let segment = Arc::new(builder.seal()?);
//!
//! let query = QueryParser::new("body").parse("rust")?;
//! let results = Searcher::new(segment).search(&query, 10)?;
//! assert_eq!(results.total_hits, 1);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod document;
mod error;
pub mod index;
pub mod query;
pub mod search;
pub mod store;

// Re-exports for the public API
pub use analysis::{Analyzer, KeywordAnalyzer, StandardAnalyzer, Token};
pub use document::{Document, DocumentBuilder, Field, FieldKind};
pub use error::{Result, TiliaError};
pub use index::builder::{BuilderStats, IndexBuilder};
pub use index::postings::{DocId, Posting, PostingList};
pub use index::segment::{IndexSegment, SegmentInfo};
pub use query::ast::{Query, TermQuery};
pub use query::parser::QueryParser;
pub use search::searcher::Searcher;
pub use search::{SearchHit, SearchResults};
pub use store::{DocumentStore, StoredDocument};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
