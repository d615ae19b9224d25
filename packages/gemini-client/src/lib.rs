//! Pure Google Gemini REST API client
//!
//! A clean, minimal client for the Gemini API with no domain-specific
//! logic. Supports content generation with a system instruction and
//! single/batch embeddings.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::GeminiClient;
//!
//! let client = GeminiClient::from_env()?;
//!
//! // Generation
//! let text = client.generate("You are a factual assistant.", "Say hello").await?;
//!
//! // Embeddings
//! let embedding = client.embed("text to embed").await?;
//! let embeddings = client.embed_batch(&["a", "b", "c"]).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
    embedding_model: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, regional endpoints, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the generation model (default: gemini-2.5-flash).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the embedding model (default: text-embedding-004).
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Get the generation model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the embedding model name.
    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    /// Generate text for a prompt under a system instruction.
    pub async fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            system_instruction: Content::text(system_instruction),
            contents: vec![Content::text(prompt)],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "gemini generateContent");

        let response: GenerateContentResponse = self
            .post(&format!("models/{}:generateContent", self.model), &request)
            .await?;

        response
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.joined_text())
            .filter(|text| !text.is_empty())
            .ok_or(GeminiError::Empty)
    }

    /// Generate an embedding for one text.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbedContentRequest {
            model: None,
            content: Content::text(text),
        };

        let response: EmbedContentResponse = self
            .post(&format!("models/{}:embedContent", self.embedding_model), &request)
            .await?;

        Ok(response.embedding.values)
    }

    /// Generate embeddings for multiple texts in one call.
    pub async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let qualified_model = format!("models/{}", self.embedding_model);
        let request = BatchEmbedContentsRequest {
            requests: texts
                .iter()
                .map(|text| EmbedContentRequest {
                    model: Some(qualified_model.clone()),
                    content: Content::text(*text),
                })
                .collect(),
        };

        debug!(model = %self.embedding_model, count = texts.len(), "gemini batchEmbedContents");

        let response: BatchEmbedContentsResponse = self
            .post(
                &format!("models/{}:batchEmbedContents", self.embedding_model),
                &request,
            )
            .await?;

        if response.embeddings.len() != texts.len() {
            return Err(GeminiError::Parse(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                response.embeddings.len()
            )));
        }

        Ok(response.embeddings.into_iter().map(|e| e.values).collect())
    }

    async fn post<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp>
    where
        Req: serde::Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let response = self
            .http_client
            .post(format!("{}/{}", self.base_url, path))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api(format!("{}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))
    }
}
