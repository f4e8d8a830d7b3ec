use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::recipe_import::{
    entities::ImportedRecipe, ports::RecipeImportService, value_objects::ImportRecipesInput,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ImportRecipesQuery {
    pub cuisine: Option<String>,
    pub diet: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImportRecipesResponse {
    pub items: Vec<ImportedRecipe>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "external",
    summary = "Import recipes from the external catalogue",
    description = "Fetch recipes by cuisine/diet and reshape them, including the vegetarian keyword cross-check",
    params(ImportRecipesQuery),
    responses(
        (status = 200, body = ImportRecipesResponse),
        (status = 502, description = "Upstream recipe API unavailable")
    )
)]
pub async fn import_recipes(
    State(state): State<AppState>,
    Query(query): Query<ImportRecipesQuery>,
) -> Result<Response<ImportRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .import_recipes(ImportRecipesInput {
            cuisine: query.cuisine,
            diet: query.diet,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to import recipes: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(ImportRecipesResponse {
        count: recipes.len(),
        items: recipes,
    }))
}
