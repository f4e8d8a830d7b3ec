use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::matching::{entities::CategorizedRecipes, ports::MatchingService};

#[utoipa::path(
    get,
    path = "/matches",
    tag = "recipe",
    summary = "Categorized recipe matches",
    description = "Partition all recipes by how close the current inventory comes to making them",
    responses(
        (status = 200, body = CategorizedRecipes),
        (status = 422, description = "A stored recipe has an invalid ingredient list")
    )
)]
pub async fn get_recipe_matches(
    State(state): State<AppState>,
) -> Result<Response<CategorizedRecipes>, ApiError> {
    let results = state.service.categorize().await.map_err(|e| {
        tracing::error!("Failed to categorize recipes: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(results))
}
