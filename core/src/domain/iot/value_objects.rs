use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::iot::entities::SensorReading;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitReadingInput {
    pub device_id: String,
    pub gas: f64,
    pub weight: f64,
    pub fire: bool,
}

/// A stored reading together with the alert it triggered, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SensorReadingAck {
    pub reading: SensorReading,
    pub alert: Option<String>,
}
