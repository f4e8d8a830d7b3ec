use axum::{Json, extract::State};
use validator::Validate;

use crate::application::http::{
    inventory::validators::CreateInventoryItemValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use rasoi_core::domain::inventory::{
    entities::InventoryItem, ports::InventoryService, value_objects::CreateInventoryItemInput,
};

#[utoipa::path(
    post,
    path = "",
    tag = "inventory",
    summary = "Create inventory item",
    request_body = CreateInventoryItemValidator,
    responses(
        (status = 201, body = InventoryItem, description = "Item created successfully"),
        (status = 400, description = "Bad request")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateInventoryItemValidator>,
) -> Result<Response<InventoryItem>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let item = state
        .service
        .create_item(CreateInventoryItemInput {
            name: payload.name,
            category: payload.category,
            current_quantity: payload.current_quantity,
            unit: payload.unit,
            threshold: payload.threshold,
            perishable: payload.perishable,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to create inventory item: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::Created(item))
}
