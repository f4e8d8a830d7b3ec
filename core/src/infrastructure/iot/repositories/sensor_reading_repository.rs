use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        iot::{entities::SensorReading, ports::SensorReadingRepository},
    },
    entity::sensor_readings::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresSensorReadingRepository {
    pub db: DatabaseConnection,
}

impl PostgresSensorReadingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SensorReadingRepository for PostgresSensorReadingRepository {
    async fn create(&self, reading: SensorReading) -> Result<SensorReading, CoreError> {
        let active_model = ActiveModel {
            id: Set(reading.id),
            device_id: Set(reading.device_id.clone()),
            gas: Set(reading.gas),
            weight: Set(reading.weight),
            fire: Set(reading.fire),
            created_at: Set(reading.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create sensor reading: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(SensorReading::from(created))
    }

    async fn get_latest(&self, limit: u64) -> Result<Vec<SensorReading>, CoreError> {
        let readings = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get sensor readings: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(readings.iter().map(SensorReading::from).collect())
    }
}
