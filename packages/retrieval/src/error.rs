//! Typed errors for the retrieval library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Structured extraction and filtering are pure functions with
//! null-on-no-match semantics and cannot fail; only collaborator I/O and
//! catalog loading produce errors, and they propagate unmodified.

use thiserror::Error;

/// Errors that can occur during retrieval operations.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Semantic recall service unavailable or failed
    #[error("recall service error: {0}")]
    Recall(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Summarization service unavailable or failed
    #[error("summarizer error: {0}")]
    Summarize(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Embedding generation failed
    #[error("embedding error: {0}")]
    Embedding(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Catalog could not be read
    #[error("catalog I/O error: {0}")]
    CatalogIo(#[from] std::io::Error),

    /// Catalog could not be parsed
    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, RetrievalError>;

impl RetrievalError {
    /// True if the error came from an external collaborator rather than
    /// local state. Callers surface these as upstream failures.
    pub fn is_collaborator(&self) -> bool {
        matches!(
            self,
            RetrievalError::Recall(_) | RetrievalError::Summarize(_) | RetrievalError::Embedding(_)
        )
    }
}
