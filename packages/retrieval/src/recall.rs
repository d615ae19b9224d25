//! Embedding-backed semantic recall over the catalog.
//!
//! The index is built once at startup from the catalog's `search_text`
//! column and queried read-only afterwards - no query-time mutation, no
//! locking for concurrent reads.

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::traits::ai::Embedder;
use crate::traits::recall::SemanticRecall;

/// Precomputed embeddings for every catalog snippet.
pub struct EmbeddingIndex<E: Embedder> {
    embedder: E,
    snippets: Vec<String>,
    embeddings: Vec<Vec<f32>>,
}

impl<E: Embedder> EmbeddingIndex<E> {
    /// Build the index by embedding every `search_text` in the catalog.
    ///
    /// One batch collaborator call at startup; failures here are startup
    /// failures, not per-query ones.
    pub async fn build(catalog: &Catalog, embedder: E) -> Result<Self> {
        let texts = catalog.search_texts();
        let embeddings = if texts.is_empty() {
            Vec::new()
        } else {
            embedder.embed_batch(&texts).await?
        };
        tracing::info!(snippets = texts.len(), "embedding index built");

        Ok(Self {
            embedder,
            snippets: texts.into_iter().map(String::from).collect(),
            embeddings,
        })
    }

    /// Number of indexed snippets.
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// True if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

#[async_trait]
impl<E: Embedder> SemanticRecall for EmbeddingIndex<E> {
    async fn recall(&self, query: &str, k: usize) -> Result<Vec<String>> {
        if self.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed(query).await?;

        let mut scored: Vec<(f32, &String)> = self
            .embeddings
            .iter()
            .zip(self.snippets.iter())
            .map(|(embedding, snippet)| (cosine_similarity(&query_embedding, embedding), snippet))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        Ok(scored.into_iter().map(|(_, snippet)| snippet.clone()).collect())
    }
}

/// Cosine similarity between two vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
