use super::handlers::{
    create_recipe::{__path_create_recipe, create_recipe},
    delete_recipe::{__path_delete_recipe, delete_recipe},
    find_by_ingredients::{__path_find_by_ingredients, find_by_ingredients},
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipe_matches::{__path_get_recipe_matches, get_recipe_matches},
    get_recipes::{__path_get_recipes, get_recipes},
    get_serving_overview::{__path_get_serving_overview, get_serving_overview},
    get_substitutes::{__path_get_substitutes, get_substitutes},
    update_recipe::{__path_update_recipe, update_recipe},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_recipes,
    create_recipe,
    get_serving_overview,
    get_recipe_matches,
    find_by_ingredients,
    get_recipe,
    update_recipe,
    delete_recipe,
    get_substitutes
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/recipes", root_path),
            get(get_recipes).post(create_recipe),
        )
        .route(
            &format!("{}/recipes/serving-overview", root_path),
            get(get_serving_overview),
        )
        .route(
            &format!("{}/recipes/matches", root_path),
            get(get_recipe_matches),
        )
        .route(
            &format!("{}/recipes/by-ingredients", root_path),
            get(find_by_ingredients),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/substitutes", root_path),
            get(get_substitutes),
        )
}
