use crate::domain::common::{RasoiConfig, services::Service};
use crate::infrastructure::{
    db::postgres::{Postgres, PostgresConfig},
    health::PostgresHealthCheckRepository,
    inventory::PostgresInventoryRepository,
    iot::PostgresSensorReadingRepository,
    recipe::PostgresRecipeRepository,
    recipe_import::SpoonacularClient,
};

pub type RasoiService = Service<
    PostgresInventoryRepository,
    PostgresRecipeRepository,
    PostgresSensorReadingRepository,
    PostgresHealthCheckRepository,
    SpoonacularClient,
>;

pub async fn create_service(config: RasoiConfig) -> Result<RasoiService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    Ok(Service::new(
        PostgresInventoryRepository::new(postgres.get_db()),
        PostgresRecipeRepository::new(postgres.get_db()),
        PostgresSensorReadingRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
        SpoonacularClient::new(config.spoonacular.api_key, config.spoonacular.base_url),
    ))
}
