use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct MenuPlanConfig {
    pub storage: StorageConfig,
    pub llm: LLMConfig,
    pub seed_catalog: bool,
}

#[derive(Clone, Debug)]
pub enum StorageConfig {
    Memory,
    File { data_dir: PathBuf },
    Postgres(DatabaseConfig),
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum LLMProvider {
    Gemini,
    Echo,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
