use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::recipe::{entities::Recipe, ports::RecipeService};

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = Recipe),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .get_recipe(recipe_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get recipe: {}", e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    Ok(Response::OK(recipe))
}
