//! Semantic recall trait.

use async_trait::async_trait;

use crate::error::Result;

/// Semantic recall over the indexed catalog.
///
/// Given query text, returns up to `k` snippets judged topically relevant.
/// Snippets are `search_text` values; the caller joins them back to
/// catalog rows by exact equality. No ordering guarantee is required -
/// the pipeline treats the output as an unordered set.
#[async_trait]
pub trait SemanticRecall: Send + Sync {
    /// Recall up to `k` relevant snippets for the query.
    async fn recall(&self, query: &str, k: usize) -> Result<Vec<String>>;
}
