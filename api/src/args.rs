use clap::Parser;
use rasoi_core::domain::common::{DatabaseConfig, RasoiConfig, SpoonacularConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "rasoi-api", about = "Rasoi smart kitchen API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub spoonacular: SpoonacularArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(id = "db_host", long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "db_port", long = "db-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "rasoi")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SpoonacularArgs {
    #[arg(long = "spoonacular-api-key", env = "SPOONACULAR_API_KEY", default_value = "")]
    pub api_key: String,

    #[arg(
        long = "spoonacular-base-url",
        env = "SPOONACULAR_BASE_URL",
        default_value = "https://api.spoonacular.com"
    )]
    pub base_url: String,
}

impl From<Args> for RasoiConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            spoonacular: SpoonacularConfig {
                api_key: args.spoonacular.api_key,
                base_url: args.spoonacular.base_url,
            },
        }
    }
}
