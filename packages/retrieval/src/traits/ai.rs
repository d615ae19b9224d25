//! AI traits for LLM operations.
//!
//! Implementations wrap specific providers (Gemini, OpenAI, etc.) and
//! handle the specifics of prompting and response parsing.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::listing::Listing;

/// Result summarization.
///
/// Given the original query and the final candidate set, produces a short
/// natural-language summary. An empty candidate set is a valid input and
/// must yield a gracious no-results message, not an error.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize the listings in the context of the query.
    async fn summarize(&self, query: &str, listings: &[Listing]) -> Result<String>;
}

/// Embedding generation for semantic similarity.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for one text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts.
    ///
    /// More efficient implementations batch the provider call.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        // Default implementation calls embed sequentially
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }
}
