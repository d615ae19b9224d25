//! Query orchestration: parse, recall, filter, fall back, summarize.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::pipeline::filter::{apply_constraints, select_final};
use crate::pipeline::parse::parse_query;
use crate::traits::ai::Summarizer;
use crate::traits::recall::SemanticRecall;
use crate::types::config::EngineConfig;
use crate::types::response::QueryAnswer;

/// The query-answering engine.
///
/// Holds the read-only catalog and the two collaborator seams. Each call
/// to [`answer`](QueryEngine::answer) runs one query start-to-finish with
/// no shared mutable state, so a single engine serves concurrent queries.
pub struct QueryEngine {
    catalog: Arc<Catalog>,
    recall: Arc<dyn SemanticRecall>,
    summarizer: Arc<dyn Summarizer>,
    config: EngineConfig,
}

impl QueryEngine {
    /// Create an engine with the default configuration.
    pub fn new(
        catalog: Arc<Catalog>,
        recall: Arc<dyn SemanticRecall>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            catalog,
            recall,
            summarizer,
            config: EngineConfig::default(),
        }
    }

    /// Override the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The catalog this engine answers over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Answer one free-text query.
    ///
    /// Sequence: extract constraints; recall `limit + margin` snippets for
    /// the same query text; join snippets to catalog rows; filter by the
    /// constraints; apply the fallback rule; truncate to `limit`;
    /// summarize. No retries and no branching beyond the fallback rule.
    /// Collaborator failures abort this query only and propagate
    /// unmodified.
    pub async fn answer(&self, query: &str) -> Result<QueryAnswer> {
        let constraints = parse_query(query);
        tracing::debug!(
            city = constraints.city.as_deref(),
            unit_type = constraints.unit_type.as_deref(),
            budget = constraints.budget,
            "parsed constraints"
        );

        let snippets = self
            .recall
            .recall(query, self.config.recall_request_size())
            .await?;
        let candidates = self.catalog.match_snippets(&snippets);
        tracing::debug!(
            snippets = snippets.len(),
            candidates = candidates.len(),
            "semantic candidates joined to catalog"
        );

        let filtered = apply_constraints(&candidates, &constraints);
        let exact = !filtered.is_empty();
        let mut results = select_final(filtered, candidates);
        results.truncate(self.config.recall_limit);
        tracing::debug!(
            results = results.len(),
            exact_match = exact,
            "final candidate set selected"
        );

        let summary = self.summarizer.summarize(query, &results).await?;

        Ok(QueryAnswer { summary, results })
    }
}
