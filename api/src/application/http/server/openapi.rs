use crate::application::http::{
    health::HealthApiDoc, inventory::router::InventoryApiDoc, iot::router::IotApiDoc,
    recipe::router::RecipeApiDoc, recipe_import::router::RecipeImportApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rasoi API"
    ),
    nest(
        (path = "/inventory", api = InventoryApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/iot", api = IotApiDoc),
        (path = "/external", api = RecipeImportApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
