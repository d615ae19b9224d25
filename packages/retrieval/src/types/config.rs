//! Configuration for the query engine.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the retrieval pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum listings consumed downstream (summarized and returned).
    ///
    /// Default: 10.
    pub recall_limit: usize,

    /// Extra candidates requested from semantic recall beyond
    /// `recall_limit`, so constraint filtering has headroom to discard
    /// near-misses without starving the result set.
    ///
    /// Default: 5 (request 15, keep up to 10).
    pub recall_margin: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recall_limit: 10,
            recall_margin: 5,
        }
    }
}

impl EngineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recall limit.
    pub fn with_recall_limit(mut self, limit: usize) -> Self {
        self.recall_limit = limit;
        self
    }

    /// Set the recall margin.
    pub fn with_recall_margin(mut self, margin: usize) -> Self {
        self.recall_margin = margin;
        self
    }

    /// Number of candidates to request from the recall service.
    pub fn recall_request_size(&self) -> usize {
        self.recall_limit + self.recall_margin
    }
}
