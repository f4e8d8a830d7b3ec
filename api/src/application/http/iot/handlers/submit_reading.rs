use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    iot::validators::SubmitReadingValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use rasoi_core::domain::iot::{
    entities::SensorReading,
    ports::IotService,
    value_objects::SubmitReadingInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitReadingResponse {
    pub message: String,
    pub alert: Option<String>,
    pub reading: SensorReading,
}

#[utoipa::path(
    post,
    path = "/sensor",
    tag = "iot",
    summary = "Submit sensor reading",
    description = "Store a sensor reading and derive a kitchen alert when thresholds are breached",
    request_body = SubmitReadingValidator,
    responses(
        (status = 201, body = SubmitReadingResponse, description = "Reading stored"),
        (status = 400, description = "Bad request")
    )
)]
pub async fn submit_reading(
    State(state): State<AppState>,
    Json(payload): Json<SubmitReadingValidator>,
) -> Result<Response<SubmitReadingResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let ack = state
        .service
        .record_reading(SubmitReadingInput {
            device_id: payload.device_id,
            gas: payload.gas,
            weight: payload.weight,
            fire: payload.fire,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to store sensor reading: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::Created(SubmitReadingResponse {
        message: "Sensor data saved".to_string(),
        alert: ack.alert,
        reading: ack.reading,
    }))
}
