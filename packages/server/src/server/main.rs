// Main entry point for the property query API server

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gemini_client::GeminiClient;
use retrieval::ai::Gemini;
use retrieval::{Catalog, EmbeddingIndex, EngineConfig, QueryEngine};
use server_core::{build_app, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,retrieval=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // .env is optional; deployments may set the environment directly
    dotenvy::dotenv().ok();

    tracing::info!("Starting Property Query API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Load the catalog (read-only for the process lifetime)
    tracing::info!(path = %config.catalog_path, "Loading catalog...");
    let catalog =
        Arc::new(Catalog::load(&config.catalog_path).context("Failed to load catalog")?);
    tracing::info!(listings = catalog.len(), "Catalog loaded");

    // One Gemini client serves both embedding and summarization
    let ai = Gemini::from_client(GeminiClient::new(config.gemini_api_key.clone()));

    // Embed the catalog once at startup; queries only read the index
    tracing::info!("Building embedding index...");
    let index = EmbeddingIndex::build(&catalog, ai.clone())
        .await
        .context("Failed to build embedding index")?;

    let mut engine_config = EngineConfig::default();
    if let Some(limit) = config.recall_limit {
        engine_config = engine_config.with_recall_limit(limit);
    }
    if let Some(margin) = config.recall_margin {
        engine_config = engine_config.with_recall_margin(margin);
    }

    let engine = Arc::new(
        QueryEngine::new(catalog, Arc::new(index), Arc::new(ai)).with_config(engine_config),
    );

    // Build application
    let app = build_app(engine);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
