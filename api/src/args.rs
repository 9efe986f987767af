use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use menuplan_core::{
    domain::common::{DatabaseConfig, LLMConfig, LLMProvider, MenuPlanConfig, StorageConfig},
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "menuplan-api", version, about = "Meal-planning admin API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Write the demo catalog when no catalog has been stored yet
    #[arg(long, env = "SEED_CATALOG", default_value_t = false, action = ArgAction::Set)]
    pub seed_catalog: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "metrics-enabled", env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    Memory,
    File,
    Postgres,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long = "storage-backend", env = "STORAGE_BACKEND", value_enum, default_value_t = StorageBackend::File)]
    pub backend: StorageBackend,

    #[arg(long = "data-dir", env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "menuplan")]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmBackend {
    Gemini,
    Echo,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value_t = LlmBackend::Gemini)]
    pub provider: LlmBackend,

    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for MenuPlanConfig {
    fn from(args: Args) -> Self {
        let storage = match args.storage.backend {
            StorageBackend::Memory => StorageConfig::Memory,
            StorageBackend::File => StorageConfig::File {
                data_dir: args.storage.data_dir,
            },
            StorageBackend::Postgres => StorageConfig::Postgres(DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            }),
        };

        let provider = match args.llm.provider {
            LlmBackend::Gemini => LLMProvider::Gemini,
            LlmBackend::Echo => LLMProvider::Echo,
        };

        MenuPlanConfig {
            storage,
            llm: LLMConfig {
                provider,
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            seed_catalog: args.seed_catalog,
        }
    }
}
