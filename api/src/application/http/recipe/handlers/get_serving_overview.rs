use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use rasoi_core::domain::matching::{entities::RecipeServing, ports::MatchingService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServingOverviewResponse {
    pub items: Vec<RecipeServing>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/serving-overview",
    tag = "recipe",
    summary = "Serving capacity for all recipes",
    description = "How many servings each recipe can produce from the current inventory, best first",
    responses(
        (status = 200, body = ServingOverviewResponse),
        (status = 422, description = "A stored recipe has an invalid ingredient list")
    )
)]
pub async fn get_serving_overview(
    State(state): State<AppState>,
) -> Result<Response<ServingOverviewResponse>, ApiError> {
    let rankings = state.service.serving_overview().await.map_err(|e| {
        tracing::error!("Failed to compute serving overview: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(ServingOverviewResponse {
        count: rankings.len(),
        items: rankings,
    }))
}
