//! Server configuration from environment variables.

use anyhow::{Context, Result};

/// Runtime configuration.
///
/// Read once at startup. `GEMINI_API_KEY` is mandatory; everything else
/// has a default. `RECALL_LIMIT` / `RECALL_MARGIN` override the engine's
/// recall sizing when set.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: String,
    pub catalog_path: String,
    pub recall_limit: Option<usize>,
    pub recall_margin: Option<usize>,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key =
            std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?;

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().context("PORT must be a number")?,
            Err(_) => 8080,
        };

        let catalog_path =
            std::env::var("CATALOG_PATH").unwrap_or_else(|_| "data/properties.json".to_string());

        let recall_limit = parse_optional("RECALL_LIMIT")?;
        let recall_margin = parse_optional("RECALL_MARGIN")?;

        Ok(Self {
            port,
            gemini_api_key,
            catalog_path,
            recall_limit,
            recall_margin,
        })
    }
}

fn parse_optional(name: &str) -> Result<Option<usize>> {
    match std::env::var(name) {
        Ok(value) => {
            let parsed = value
                .parse()
                .with_context(|| format!("{} must be a number", name))?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}
