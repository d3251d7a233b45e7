//! Error types for Tilia.

use thiserror::Error;

/// Main error type for Tilia operations.
///
/// Every failure surfaces as a typed variant so callers can branch on
/// kind. Nothing in the library panics on user input.
#[derive(Error, Debug)]
pub enum TiliaError {
    /// The builder has been sealed; it no longer accepts mutations.
    #[error("builder is sealed")]
    BuilderSealed,

    /// The query string could not be parsed.
    #[error("query syntax error: {0}")]
    QuerySyntax(String),

    /// A strict lookup referenced a field with no postings in the segment.
    #[error("field is not indexed: {0}")]
    FieldNotIndexed(String),

    /// Text analysis failed.
    #[error("analysis error: {0}")]
    Analysis(String),

    /// Index construction or lookup failed.
    #[error("index error: {0}")]
    Index(String),

    /// IO error (file reading in demo paths).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Tilia operations.
pub type Result<T> = std::result::Result<T, TiliaError>;

impl TiliaError {
    /// Create a query syntax error.
    pub fn query<S: Into<String>>(message: S) -> Self {
        TiliaError::QuerySyntax(message.into())
    }

    /// Create an index error.
    pub fn index<S: Into<String>>(message: S) -> Self {
        TiliaError::Index(message.into())
    }

    /// Create an analysis error.
    pub fn analysis<S: Into<String>>(message: S) -> Self {
        TiliaError::Analysis(message.into())
    }

    /// Check if the caller can recover by correcting input and retrying.
    ///
    /// `BuilderSealed` is terminal for that builder instance; a new builder
    /// must be created.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TiliaError::QuerySyntax(_) | TiliaError::FieldNotIndexed(_)
        )
    }
}
