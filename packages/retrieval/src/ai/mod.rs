//! AI collaborator implementations.
//!
//! Available with the `gemini` feature:
//! - [`gemini::Gemini`] - reference implementation over the Gemini API

pub mod gemini;

pub use gemini::Gemini;
