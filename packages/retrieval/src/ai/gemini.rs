//! Gemini implementation of the Summarizer and Embedder traits.
//!
//! A reference implementation using gemini-2.5-flash for summaries and
//! text-embedding-004 for embeddings.
//!
//! # Example
//!
//! ```rust,ignore
//! use retrieval::ai::Gemini;
//!
//! let ai = Gemini::from_env()?;
//! let index = EmbeddingIndex::build(&catalog, ai.clone()).await?;
//! ```

use async_trait::async_trait;
use gemini_client::GeminiClient;

use crate::error::{Result, RetrievalError};
use crate::pipeline::prompts::{format_summary_prompt, SUMMARY_SYSTEM_INSTRUCTION};
use crate::traits::ai::{Embedder, Summarizer};
use crate::types::listing::Listing;

/// Gemini-backed AI collaborator.
#[derive(Clone)]
pub struct Gemini {
    client: GeminiClient,
}

impl Gemini {
    /// Create from an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let client = GeminiClient::from_env()
            .map_err(|e| RetrievalError::Config(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already-configured client.
    pub fn from_client(client: GeminiClient) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &GeminiClient {
        &self.client
    }
}

#[async_trait]
impl Summarizer for Gemini {
    async fn summarize(&self, query: &str, listings: &[Listing]) -> Result<String> {
        let prompt = format_summary_prompt(query, listings);

        self.client
            .generate(SUMMARY_SYSTEM_INSTRUCTION, &prompt)
            .await
            .map_err(|e| RetrievalError::Summarize(Box::new(e)))
    }
}

#[async_trait]
impl Embedder for Gemini {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.client
            .embed(text)
            .await
            .map_err(|e| RetrievalError::Embedding(Box::new(e)))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.client
            .embed_batch(texts)
            .await
            .map_err(|e| RetrievalError::Embedding(Box::new(e)))
    }
}
