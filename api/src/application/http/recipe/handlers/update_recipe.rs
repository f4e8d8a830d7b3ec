use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    recipe::validators::UpdateRecipeValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use rasoi_core::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, ports::RecipeService, value_objects::UpdateRecipeInput},
};

#[utoipa::path(
    put,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    request_body = UpdateRecipeValidator,
    responses(
        (status = 200, body = Recipe),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateRecipeValidator>,
) -> Result<Response<Recipe>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let recipe = state
        .service
        .update_recipe(
            recipe_id,
            UpdateRecipeInput {
                name: payload.name,
                description: payload.description,
                category: payload.category,
                cuisine: payload.cuisine,
                ingredients: payload.ingredients,
                steps: payload.steps,
                serves: payload.serves,
                preparation_time: payload.preparation_time,
                difficulty: payload.difficulty,
                possible_substitutes: payload.possible_substitutes,
                image_url: payload.image_url,
                tags: payload.tags,
            },
        )
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Recipe not found".to_string()),
            other => {
                tracing::error!("Failed to update recipe: {}", other);
                ApiError::from(other)
            }
        })?;

    Ok(Response::OK(recipe))
}
