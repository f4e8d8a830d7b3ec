use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::{
    common::entities::app_errors::CoreError,
    matching::{entities::SubstituteResult, ports::MatchingService},
};

#[utoipa::path(
    get,
    path = "/{recipe_id}/substitutes",
    tag = "recipe",
    summary = "Substitutes for a recipe",
    description = "Substitution suggestions for the recipe's ingredients that are missing from the inventory",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = SubstituteResult),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_substitutes(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SubstituteResult>, ApiError> {
    let result = state
        .service
        .substitutes_for(recipe_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Recipe not found".to_string()),
            other => {
                tracing::error!("Failed to resolve substitutes: {}", other);
                ApiError::from(other)
            }
        })?;

    Ok(Response::OK(result))
}
