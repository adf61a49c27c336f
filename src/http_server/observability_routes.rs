//! Observability HTTP Routes
//!
//! Service banner and health check.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::rest_api::SharedState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}

/// Root banner
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub ok: bool,
    pub message: String,
}

/// Health check and banner routes
pub fn health_routes(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        ok: true,
        message: "campus REST API".to_string(),
    })
}

/// Reports 503 when the store does not answer
async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let (status, database) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(err) => {
            tracing::warn!(error = %err, "health check could not reach the store");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let response = HealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (status, Json(response))
}
