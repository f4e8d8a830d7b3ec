use super::handlers::import_recipes::{__path_import_recipes, import_recipes};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(import_recipes))]
pub struct RecipeImportApiDoc;

pub fn recipe_import_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/external/recipes", state.args.server.root_path),
        get(import_recipes),
    )
}
