use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    inventory::ports::InventoryRepository,
    iot::ports::SensorReadingRepository,
    recipe::ports::RecipeRepository,
    recipe_import::ports::RecipeProvider,
};

impl<I, R, S, H, P> HealthCheckService for Service<I, R, S, H, P>
where
    I: InventoryRepository,
    R: RecipeRepository,
    S: SensorReadingRepository,
    H: HealthCheckRepository,
    P: RecipeProvider,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
