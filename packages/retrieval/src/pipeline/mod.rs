//! Retrieval pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Structured-field extraction from free text (city, unit type, budget)
//! - Semantic recall with intentional over-fetch
//! - Constraint filtering (never widens the candidate set)
//! - Fallback selection (the only stage allowed to widen)
//! - Prompt construction for the result summarizer

pub mod engine;
pub mod filter;
pub mod parse;
pub mod prompts;

pub use engine::QueryEngine;
pub use filter::{apply_constraints, select_final};
pub use parse::{parse_query, SUPPORTED_CITIES};
pub use prompts::{format_summary_prompt, SUMMARY_SYSTEM_INSTRUCTION};
