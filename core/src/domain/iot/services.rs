use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    inventory::ports::InventoryRepository,
    iot::{
        entities::SensorReading,
        helpers::evaluate_alert,
        ports::{IotService, SensorReadingRepository},
        value_objects::{SensorReadingAck, SubmitReadingInput},
    },
    recipe::ports::RecipeRepository,
    recipe_import::ports::RecipeProvider,
};

impl<I, R, S, H, P> IotService for Service<I, R, S, H, P>
where
    I: InventoryRepository,
    R: RecipeRepository,
    S: SensorReadingRepository,
    H: HealthCheckRepository,
    P: RecipeProvider,
{
    async fn record_reading(&self, input: SubmitReadingInput) -> Result<SensorReadingAck, CoreError> {
        let reading = SensorReading::new(input.device_id, input.gas, input.weight, input.fire);

        let reading = self.sensor_repository.create(reading).await?;
        let alert = evaluate_alert(&reading);

        if let Some(ref alert) = alert {
            tracing::warn!(device_id = %reading.device_id, alert = %alert, "sensor alert raised");
        }

        Ok(SensorReadingAck { reading, alert })
    }

    async fn latest_readings(&self, limit: u64) -> Result<Vec<SensorReading>, CoreError> {
        self.sensor_repository.get_latest(limit).await
    }
}
