//! The query route - the service's one inbound operation.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use retrieval::QueryAnswer;

use crate::server::app::AppState;

/// Inbound request: one free-text query.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Error body returned alongside a non-success status.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Answer one free-text property query.
///
/// An empty or unparseable query is not an error - it runs the pipeline
/// unconstrained. Collaborator failures surface as 502 so the caller can
/// distinguish an upstream outage from an internal fault (500). No
/// partial summary is ever returned.
pub async fn query_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryAnswer>, (StatusCode, Json<ErrorResponse>)> {
    match state.engine.answer(&request.query).await {
        Ok(answer) => Ok(Json(answer)),
        Err(e) => {
            let status = if e.is_collaborator() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            tracing::error!(error = %e, query = %request.query, "query failed");
            Err((status, Json(ErrorResponse { error: e.to_string() })))
        }
    }
}
