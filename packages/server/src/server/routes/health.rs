use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    catalog_listings: usize,
}

/// Health check endpoint.
///
/// The catalog and embedding index are built before the server binds, so
/// a responding process is a healthy one. Reports the catalog size for
/// operational sanity checks.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        catalog_listings: state.engine.catalog().len(),
    })
}
