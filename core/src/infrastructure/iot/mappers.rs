use crate::{domain::iot::entities::SensorReading, entity::sensor_readings};

impl From<&sensor_readings::Model> for SensorReading {
    fn from(model: &sensor_readings::Model) -> Self {
        Self {
            id: model.id,
            device_id: model.device_id.clone(),
            gas: model.gas,
            weight: model.weight,
            fire: model.fire,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<sensor_readings::Model> for SensorReading {
    fn from(model: sensor_readings::Model) -> Self {
        Self::from(&model)
    }
}
