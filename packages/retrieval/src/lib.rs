//! Query Understanding and Hybrid Retrieval for Property Listings
//!
//! Turns free-text real-estate queries ("3BHK in Pune under 1 Cr") into a
//! ranked, filtered candidate set and a natural-language summary.
//!
//! # Design Philosophy
//!
//! **Recall broadly, filter strictly, never return nothing silently**
//!
//! - Structured-field extraction is a fixed grammar, not open-vocabulary NER
//! - Semantic recall over-fetches on purpose; filtering trims it down
//! - An empty filter result falls back to the unfiltered semantic set so the
//!   summarizer can explain the imprecision instead of the caller seeing a hole
//! - The library owns the join between recall snippets and catalog rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use retrieval::{Catalog, QueryEngine};
//! use retrieval::testing::{MockRecall, MockSummarizer};
//!
//! let catalog = Arc::new(Catalog::load("data/properties.json")?);
//! let engine = QueryEngine::new(
//!     catalog.clone(),
//!     Arc::new(MockRecall::returning_all(&catalog)),
//!     Arc::new(MockSummarizer::new()),
//! );
//!
//! let answer = engine.answer("3BHK in Pune under 1 Cr").await?;
//! println!("{}", answer.summary);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator trait seams (SemanticRecall, Summarizer, Embedder)
//! - [`types`] - Listing, ParsedConstraints, QueryAnswer, EngineConfig
//! - [`catalog`] - Read-only listing catalog and the search-text join
//! - [`pipeline`] - Parse, filter, fallback, prompts, and orchestration
//! - [`recall`] - Embedding-backed recall built over the catalog
//! - [`testing`] - Mock collaborators for tests

pub mod catalog;
pub mod error;
pub mod pipeline;
pub mod recall;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "gemini")]
pub mod ai;

// Re-export core types at crate root
pub use error::{Result, RetrievalError};
pub use traits::{
    ai::{Embedder, Summarizer},
    recall::SemanticRecall,
};
pub use types::{
    config::EngineConfig,
    constraints::ParsedConstraints,
    listing::Listing,
    response::QueryAnswer,
};

pub use catalog::Catalog;

// Re-export pipeline components
pub use pipeline::{
    apply_constraints, format_summary_prompt, parse_query, select_final, QueryEngine,
    SUMMARY_SYSTEM_INSTRUCTION,
};

// Re-export the embedding-backed recall
pub use recall::{cosine_similarity, EmbeddingIndex};

// Re-export testing utilities
pub use testing::{MockEmbedder, MockRecall, MockSummarizer};
