use axum::extract::State;
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database_latency_ms: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let latency = state.service.health().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        database_latency_ms: latency,
    }))
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    responses(
        (status = 200, body = DatabaseHealthStatus)
    )
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(|e| {
        tracing::error!("Readiness check failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(status))
}

#[derive(OpenApi)]
#[openapi(paths(health, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", state.args.server.root_path), get(health))
        .route(
            &format!("{}/health/ready", state.args.server.root_path),
            get(readiness),
        )
}
