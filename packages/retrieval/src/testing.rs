//! Testing utilities including mock collaborators.
//!
//! These are useful for testing the pipeline without making real AI or
//! network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::catalog::Catalog;
use crate::error::{Result, RetrievalError};
use crate::traits::ai::{Embedder, Summarizer};
use crate::traits::recall::SemanticRecall;
use crate::types::listing::Listing;

fn mock_io_error(message: &str) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message.to_string()))
}

/// A mock semantic recall service.
///
/// Returns predefined snippets per query, or a fixed default set for
/// unknown queries. Can be switched to fail for error-path tests.
#[derive(Default)]
pub struct MockRecall {
    /// Predefined snippets by query
    responses: Arc<RwLock<HashMap<String, Vec<String>>>>,

    /// Snippets returned for queries with no predefined response
    default_snippets: Vec<String>,

    /// When true, every call fails with a connectivity error
    fail: bool,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockRecallCall>>>,
}

/// Record of a call made to the mock recall service.
#[derive(Debug, Clone)]
pub struct MockRecallCall {
    pub query: String,
    pub k: usize,
}

impl MockRecall {
    /// Create a mock that recalls nothing by default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose default response is every snippet in the
    /// catalog (in catalog order).
    pub fn returning_all(catalog: &Catalog) -> Self {
        Self {
            default_snippets: catalog.search_texts().into_iter().map(String::from).collect(),
            ..Self::default()
        }
    }

    /// Add a predefined response for a query.
    pub fn with_response(
        self,
        query: impl Into<String>,
        snippets: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(query.into(), snippets.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Make every call fail with a connectivity error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockRecallCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl SemanticRecall for MockRecall {
    async fn recall(&self, query: &str, k: usize) -> Result<Vec<String>> {
        self.calls.write().unwrap().push(MockRecallCall {
            query: query.to_string(),
            k,
        });

        if self.fail {
            return Err(RetrievalError::Recall(mock_io_error("mock recall unavailable")));
        }

        let snippets = self
            .responses
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_else(|| self.default_snippets.clone());

        Ok(snippets.into_iter().take(k).collect())
    }
}

/// A mock summarizer.
///
/// Returns predefined summaries per query, or a deterministic default
/// mentioning the listing count. Can be switched to fail.
#[derive(Default)]
pub struct MockSummarizer {
    /// Predefined summaries by query
    summaries: Arc<RwLock<HashMap<String, String>>>,

    /// When true, every call fails
    fail: bool,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockSummarizeCall>>>,
}

/// Record of a call made to the mock summarizer.
#[derive(Debug, Clone)]
pub struct MockSummarizeCall {
    pub query: String,
    pub listing_count: usize,
}

impl MockSummarizer {
    /// Create a mock with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined summary for a query.
    pub fn with_summary(self, query: impl Into<String>, summary: impl Into<String>) -> Self {
        self.summaries.write().unwrap().insert(query.into(), summary.into());
        self
    }

    /// Make every call fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockSummarizeCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, query: &str, listings: &[Listing]) -> Result<String> {
        self.calls.write().unwrap().push(MockSummarizeCall {
            query: query.to_string(),
            listing_count: listings.len(),
        });

        if self.fail {
            return Err(RetrievalError::Summarize(mock_io_error("mock summarizer unavailable")));
        }

        if let Some(summary) = self.summaries.read().unwrap().get(query) {
            return Ok(summary.clone());
        }

        if listings.is_empty() {
            Ok("No matching properties found for that request.".to_string())
        } else {
            Ok(format!("Found {} matching properties.", listings.len()))
        }
    }
}

/// A mock embedder producing deterministic embeddings.
#[derive(Default)]
pub struct MockEmbedder {
    /// Predefined embeddings by text
    embeddings: Arc<RwLock<HashMap<String, Vec<f32>>>>,

    /// Default embedding dimension
    embedding_dim: usize,

    /// When true, every call fails
    fail: bool,
}

impl MockEmbedder {
    /// Create a new mock embedder.
    pub fn new() -> Self {
        Self {
            embedding_dim: 64,
            ..Default::default()
        }
    }

    /// Set the embedding dimension.
    pub fn with_embedding_dim(mut self, dim: usize) -> Self {
        self.embedding_dim = dim;
        self
    }

    /// Add a predefined embedding for a text.
    pub fn with_embedding(self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        self.embeddings.write().unwrap().insert(text.into(), embedding);
        self
    }

    /// Make every call fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Generate a deterministic embedding based on text.
    fn generate_deterministic_embedding(&self, text: &str) -> Vec<f32> {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let hash = hasher.finalize();

        (0..self.embedding_dim)
            .map(|i| {
                let byte = hash[i % 32] as f32;
                (byte / 127.5) - 1.0
            })
            .collect()
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if self.fail {
            return Err(RetrievalError::Embedding(mock_io_error("mock embedder unavailable")));
        }

        Ok(self
            .embeddings
            .read()
            .unwrap()
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.generate_deterministic_embedding(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_recall_predefined_and_default() {
        let recall = MockRecall::new().with_response("flats", ["snippet a", "snippet b"]);

        let snippets = recall.recall("flats", 15).await.unwrap();
        assert_eq!(snippets.len(), 2);

        let snippets = recall.recall("unknown", 15).await.unwrap();
        assert!(snippets.is_empty());

        let calls = recall.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].k, 15);
    }

    #[tokio::test]
    async fn test_mock_recall_respects_k() {
        let recall = MockRecall::new().with_response("q", ["a", "b", "c"]);
        assert_eq!(recall.recall("q", 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_recall_failure() {
        let recall = MockRecall::new().failing();
        let err = recall.recall("q", 5).await.unwrap_err();
        assert!(err.is_collaborator());
    }

    #[tokio::test]
    async fn test_mock_summarizer_tracks_listing_count() {
        let summarizer = MockSummarizer::new();
        let summary = summarizer.summarize("q", &[]).await.unwrap();
        assert!(summary.contains("No matching"));

        let calls = summarizer.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].listing_count, 0);
    }

    #[tokio::test]
    async fn test_mock_embedder_deterministic() {
        let embedder = MockEmbedder::new().with_embedding_dim(32);

        let a = embedder.embed("hello").await.unwrap();
        let b = embedder.embed("hello").await.unwrap();
        let c = embedder.embed("world").await.unwrap();

        assert_eq!(a.len(), 32);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
