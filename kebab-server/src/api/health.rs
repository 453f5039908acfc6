//! Health check
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /health | GET | liveness + version |

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{ApiResponse, ok};

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    ingredients: usize,
}

/// GET /health - liveness
pub async fn health(State(state): State<ServerState>) -> ApiResponse<HealthResponse> {
    ok(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        ingredients: state.catalog.len(),
    })
}
