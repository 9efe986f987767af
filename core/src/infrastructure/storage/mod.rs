use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

pub mod file;
pub mod memory;
pub mod postgres;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use postgres::PostgresKeyValueStore;

/// Key-value backend selected at start-up.
#[derive(Debug, Clone)]
pub enum AnyKeyValueStore {
    Memory(InMemoryKeyValueStore),
    File(FileKeyValueStore),
    Postgres(PostgresKeyValueStore),
}

impl KeyValueStore for AnyKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        match self {
            AnyKeyValueStore::Memory(store) => store.get(key).await,
            AnyKeyValueStore::File(store) => store.get(key).await,
            AnyKeyValueStore::Postgres(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        match self {
            AnyKeyValueStore::Memory(store) => store.set(key, value).await,
            AnyKeyValueStore::File(store) => store.set(key, value).await,
            AnyKeyValueStore::Postgres(store) => store.set(key, value).await,
        }
    }
}
