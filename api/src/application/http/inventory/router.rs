use super::handlers::{
    create_item::{__path_create_item, create_item},
    delete_item::{__path_delete_item, delete_item},
    get_item::{__path_get_item, get_item},
    get_items::{__path_get_items, get_items},
    get_waste_prediction::{__path_get_waste_prediction, get_waste_prediction},
    update_item::{__path_update_item, update_item},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_items,
    create_item,
    get_waste_prediction,
    get_item,
    update_item,
    delete_item
))]
pub struct InventoryApiDoc;

pub fn inventory_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/inventory", state.args.server.root_path),
            get(get_items).post(create_item),
        )
        .route(
            &format!("{}/inventory/waste-prediction", state.args.server.root_path),
            get(get_waste_prediction),
        )
        .route(
            &format!("{}/inventory/{{item_id}}", state.args.server.root_path),
            get(get_item).put(update_item).delete(delete_item),
        )
}
