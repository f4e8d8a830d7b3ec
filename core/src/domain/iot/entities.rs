use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One reading from the kitchen sensor unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SensorReading {
    pub id: Uuid,
    pub device_id: String,
    pub gas: f64,
    pub weight: f64,
    pub fire: bool,
    pub created_at: DateTime<Utc>,
}

impl SensorReading {
    pub fn new(device_id: String, gas: f64, weight: f64, fire: bool) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            device_id,
            gas,
            weight,
            fire,
            created_at: now,
        }
    }
}
