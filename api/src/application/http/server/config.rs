use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

/// Public configuration exposed to API consumers.
#[derive(Debug, Serialize, ToSchema)]
pub struct AppConfigResponse {
    pub name: String,
    pub version: String,
    pub root_path: String,
}

pub async fn get_config(State(state): State<AppState>) -> Response<AppConfigResponse> {
    Response::OK(AppConfigResponse {
        name: "rasoi".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
    })
}
