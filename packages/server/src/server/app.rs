//! Application setup and router construction.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use retrieval::QueryEngine;

use crate::server::routes::{health_handler, query_handler};

/// Shared application state.
///
/// The engine holds the read-only catalog and collaborator clients, so
/// one instance serves all requests.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QueryEngine>,
}

/// Build the Axum application router.
pub fn build_app(engine: Arc<QueryEngine>) -> Router {
    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/query", post(query_handler))
        .route("/health", get(health_handler))
        .layer(Extension(AppState { engine }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
