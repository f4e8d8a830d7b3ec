use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::inventory::{entities::InventoryItem, ports::InventoryService};

#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "inventory",
    summary = "Get inventory item",
    params(
        ("item_id" = Uuid, Path, description = "Inventory item id"),
    ),
    responses(
        (status = 200, body = InventoryItem),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<InventoryItem>, ApiError> {
    let item = state
        .service
        .get_item(item_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get inventory item: {}", e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::NotFound("Item not found".to_string()))?;

    Ok(Response::OK(item))
}
