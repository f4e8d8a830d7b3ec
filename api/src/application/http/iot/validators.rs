use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitReadingValidator {
    #[validate(length(min = 1, message = "device_id is required"))]
    pub device_id: String,

    #[serde(default)]
    pub gas: f64,

    #[serde(default)]
    pub weight: f64,

    #[serde(default)]
    pub fire: bool,
}
