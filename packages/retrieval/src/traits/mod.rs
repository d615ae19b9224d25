//! Collaborator trait seams.
//!
//! The pipeline's two external collaborators - semantic recall and result
//! summarization - sit behind traits so implementations can be swapped
//! (Gemini in production, mocks in tests) without touching the core.

pub mod ai;
pub mod recall;

pub use ai::{Embedder, Summarizer};
pub use recall::SemanticRecall;
