use clap::Parser;
use demeter_core::domain::common::{
    DatabaseConfig, DemeterConfig, LlmConfig, ObjectStorageConfig, OcrConfig, RecipeApiConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "demeter-api", about = "Demeter HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub recipes: RecipeArgs,

    #[command(flatten)]
    pub storage: StorageArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(
        id = "server-host",
        long = "server-host",
        env = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        id = "server-port",
        long = "server-port",
        env = "SERVER_PORT",
        default_value_t = 8080
    )]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api"
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
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
    #[arg(
        id = "db-host",
        long = "db-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "db-port",
        long = "db-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "demeter")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "demeter")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "demeter")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-2.5-pro"
    )]
    pub gemini_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OcrArgs {
    /// Base URL of the OCR sidecar service
    #[arg(
        id = "ocr-base-url",
        long = "ocr-base-url",
        env = "OCR_BASE_URL",
        default_value = "http://localhost:5001"
    )]
    pub base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RecipeArgs {
    #[arg(long = "spoonacular-api-key", env = "SPOONACULAR_API_KEY")]
    pub api_key: String,

    #[arg(
        id = "spoonacular-base-url",
        long = "spoonacular-base-url",
        env = "SPOONACULAR_BASE_URL",
        default_value = "https://api.spoonacular.com"
    )]
    pub base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(
        long = "minio-endpoint",
        env = "MINIO_ENDPOINT",
        default_value = "http://localhost:9000"
    )]
    pub endpoint: String,

    #[arg(long = "minio-region", env = "MINIO_REGION", default_value = "us-east-1")]
    pub region: String,

    #[arg(long = "minio-access-key", env = "MINIO_ACCESS_KEY")]
    pub access_key: String,

    #[arg(long = "minio-secret-key", env = "MINIO_SECRET_KEY")]
    pub secret_key: String,

    #[arg(
        long = "minio-bucket-prefix",
        env = "MINIO_BUCKET_PREFIX",
        default_value = "demeter"
    )]
    pub bucket_prefix: String,

    #[arg(long = "minio-use-ssl", env = "MINIO_USE_SSL", default_value_t = false)]
    pub use_ssl: bool,
}

impl From<Args> for DemeterConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            ocr: OcrConfig {
                base_url: args.ocr.base_url,
            },
            recipes: RecipeApiConfig {
                base_url: args.recipes.base_url,
                api_key: args.recipes.api_key,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.storage.endpoint,
                region: args.storage.region,
                access_key: args.storage.access_key,
                secret_key: args.storage.secret_key,
                bucket_prefix: args.storage.bucket_prefix,
                use_ssl: args.storage.use_ssl,
            },
        }
    }
}
