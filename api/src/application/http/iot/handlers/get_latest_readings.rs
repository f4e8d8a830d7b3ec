use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::iot::{entities::SensorReading, ports::IotService};

const DEFAULT_LIMIT: u64 = 5;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetLatestReadingsQuery {
    /// Number of readings to return, newest first (default 5)
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetLatestReadingsResponse {
    pub items: Vec<SensorReading>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/latest",
    tag = "iot",
    summary = "Latest sensor readings",
    params(GetLatestReadingsQuery),
    responses(
        (status = 200, body = GetLatestReadingsResponse)
    )
)]
pub async fn get_latest_readings(
    State(state): State<AppState>,
    Query(query): Query<GetLatestReadingsQuery>,
) -> Result<Response<GetLatestReadingsResponse>, ApiError> {
    let readings = state
        .service
        .latest_readings(query.limit.unwrap_or(DEFAULT_LIMIT))
        .await
        .map_err(|e| {
            tracing::error!("Failed to get sensor readings: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(GetLatestReadingsResponse {
        count: readings.len(),
        items: readings,
    }))
}
