use axum::{Json, extract::State};
use validator::Validate;

use crate::application::http::{
    recipe::validators::CreateRecipeValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use rasoi_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::CreateRecipeInput,
};

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    request_body = CreateRecipeValidator,
    responses(
        (status = 201, body = Recipe, description = "Recipe created successfully"),
        (status = 400, description = "Bad request")
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecipeValidator>,
) -> Result<Response<Recipe>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let recipe = state
        .service
        .create_recipe(CreateRecipeInput {
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
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to create recipe: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::Created(recipe))
}
