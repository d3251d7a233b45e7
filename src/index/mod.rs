//! Index construction and segments.
//!
//! Indexing is split into a mutable build phase and an immutable query
//! phase:
//!
//! - [`builder::IndexBuilder`] accumulates postings and stored values,
//!   one document at a time.
//! - [`builder::IndexBuilder::seal`] freezes the accumulators into an
//!   [`segment::IndexSegment`], the only state searches run against.
//!
//! The transition is one-way; a sealed builder rejects further
//! mutation with [`TiliaError::BuilderSealed`](crate::TiliaError::BuilderSealed).

pub mod builder;
pub mod postings;
pub mod segment;

pub use builder::{BuilderStats, IndexBuilder};
pub use postings::{DocId, Posting, PostingList, TermPostingIndex};
pub use segment::{IndexSegment, SegmentInfo};
