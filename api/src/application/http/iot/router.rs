use super::handlers::{
    get_latest_readings::{__path_get_latest_readings, get_latest_readings},
    submit_reading::{__path_submit_reading, submit_reading},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(submit_reading, get_latest_readings))]
pub struct IotApiDoc;

pub fn iot_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/iot/sensor", state.args.server.root_path),
            post(submit_reading),
        )
        .route(
            &format!("{}/iot/latest", state.args.server.root_path),
            get(get_latest_readings),
        )
}
