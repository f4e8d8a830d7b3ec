use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::matching::{entities::IngredientMatch, ports::MatchingService};

#[derive(Debug, Deserialize, IntoParams)]
pub struct FindByIngredientsQuery {
    /// Comma-separated ingredient names, e.g. "onion,tomato"
    pub ingredients: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FindByIngredientsResponse {
    pub items: Vec<IngredientMatch>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/by-ingredients",
    tag = "recipe",
    summary = "Find recipes by ingredients",
    description = "Recipes that use any of the named ingredients, most matches first",
    params(FindByIngredientsQuery),
    responses(
        (status = 200, body = FindByIngredientsResponse),
        (status = 400, description = "No ingredient names given")
    )
)]
pub async fn find_by_ingredients(
    State(state): State<AppState>,
    Query(query): Query<FindByIngredientsQuery>,
) -> Result<Response<FindByIngredientsResponse>, ApiError> {
    let ingredient_names: Vec<String> = query
        .ingredients
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if ingredient_names.is_empty() {
        return Err(ApiError::BadRequest(
            "at least one ingredient name is required".to_string(),
        ));
    }

    let matches = state
        .service
        .find_by_ingredients(ingredient_names)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find recipes by ingredients: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(FindByIngredientsResponse {
        count: matches.len(),
        items: matches,
    }))
}
