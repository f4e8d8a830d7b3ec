use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::recipe::{
    entities::{Difficulty, Recipe, RecipeCategory},
    ports::RecipeService,
    value_objects::GetRecipesFilter,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetRecipesQuery {
    pub category: Option<RecipeCategory>,
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Free-text search over name, description and tags.
    pub search: Option<String>,
    pub sort: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetRecipesResponse {
    pub items: Vec<Recipe>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "Get recipes with optional category, cuisine, difficulty and free-text filters",
    params(GetRecipesQuery),
    responses(
        (status = 200, body = GetRecipesResponse)
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    Query(query): Query<GetRecipesQuery>,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let filter = GetRecipesFilter {
        category: query.category,
        cuisine: query.cuisine,
        difficulty: query.difficulty,
        search: query.search,
        offset: query.offset,
        limit: query.limit,
        sort: query.sort,
    };

    let recipes = state.service.list_recipes(filter).await.map_err(|e| {
        tracing::error!("Failed to list recipes: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetRecipesResponse {
        count: recipes.len(),
        items: recipes,
    }))
}
