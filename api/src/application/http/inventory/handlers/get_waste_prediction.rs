use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::inventory::{ports::InventoryService, waste::WasteFlag};

#[utoipa::path(
    get,
    path = "/waste-prediction",
    tag = "inventory",
    summary = "Predict waste risk",
    description = "Flag items at risk of being wasted, based on their usage ratio and perishability",
    responses(
        (status = 200, body = Vec<WasteFlag>)
    )
)]
pub async fn get_waste_prediction(
    State(state): State<AppState>,
) -> Result<Response<Vec<WasteFlag>>, ApiError> {
    let flags = state.service.waste_prediction().await.map_err(|e| {
        tracing::error!("Failed to generate waste prediction: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(flags))
}
