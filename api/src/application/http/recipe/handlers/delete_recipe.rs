use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::{common::entities::app_errors::CoreError, recipe::ports::RecipeService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteRecipeResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Delete recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = DeleteRecipeResponse),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteRecipeResponse>, ApiError> {
    state
        .service
        .delete_recipe(recipe_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Recipe not found".to_string()),
            other => {
                tracing::error!("Failed to delete recipe: {}", other);
                ApiError::from(other)
            }
        })?;

    Ok(Response::OK(DeleteRecipeResponse {
        message: "Recipe deleted successfully".to_string(),
    }))
}
