use sea_orm::{Database, DatabaseConnection};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let db = Database::connect(config.database_url).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
