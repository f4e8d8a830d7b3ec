pub mod health;
pub mod inventory;
pub mod iot;
pub mod query_extractor;
pub mod query_params;
pub mod recipe;
pub mod recipe_import;
pub mod server;
