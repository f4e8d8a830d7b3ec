use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    inventory::validators::UpdateInventoryItemValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use rasoi_core::domain::{
    common::entities::app_errors::CoreError,
    inventory::{
        entities::InventoryItem, ports::InventoryService, value_objects::UpdateInventoryItemInput,
    },
};

#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "inventory",
    summary = "Update inventory item",
    params(
        ("item_id" = Uuid, Path, description = "Inventory item id"),
    ),
    request_body = UpdateInventoryItemValidator,
    responses(
        (status = 200, body = InventoryItem),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateInventoryItemValidator>,
) -> Result<Response<InventoryItem>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let item = state
        .service
        .update_item(
            item_id,
            UpdateInventoryItemInput {
                name: payload.name,
                category: payload.category,
                current_quantity: payload.current_quantity,
                unit: payload.unit,
                threshold: payload.threshold,
                perishable: payload.perishable,
            },
        )
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Item not found".to_string()),
            other => {
                tracing::error!("Failed to update inventory item: {}", other);
                ApiError::from(other)
            }
        })?;

    Ok(Response::OK(item))
}
