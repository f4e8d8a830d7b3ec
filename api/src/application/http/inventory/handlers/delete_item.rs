use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::{common::entities::app_errors::CoreError, inventory::ports::InventoryService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteItemResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "inventory",
    summary = "Delete inventory item",
    params(
        ("item_id" = Uuid, Path, description = "Inventory item id"),
    ),
    responses(
        (status = 200, body = DeleteItemResponse),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteItemResponse>, ApiError> {
    state.service.delete_item(item_id).await.map_err(|e| match e {
        CoreError::NotFound => ApiError::NotFound("Item not found".to_string()),
        other => {
            tracing::error!("Failed to delete inventory item: {}", other);
            ApiError::from(other)
        }
    })?;

    Ok(Response::OK(DeleteItemResponse {
        message: "Item deleted successfully".to_string(),
    }))
}
