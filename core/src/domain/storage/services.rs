use serde::{Serialize, de::DeserializeOwned};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::{ports::KeyValueStore, value_objects::StorageKey},
};

/// Read a whole collection. An absent key is an empty collection.
pub async fn load_collection<S, T>(store: &S, key: StorageKey) -> Result<Vec<T>, CoreError>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key.as_str()).await? else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&raw).map_err(|e| {
        error!("Failed to decode stored collection {}: {}", key, e);
        CoreError::Storage(format!("stored value for {key} is not a valid collection: {e}"))
    })
}

/// Replace a whole collection.
pub async fn save_collection<S, T>(store: &S, key: StorageKey, items: &[T]) -> Result<(), CoreError>
where
    S: KeyValueStore,
    T: Serialize,
{
    let raw = serde_json::to_string(items).map_err(|e| {
        error!("Failed to encode collection {}: {}", key, e);
        CoreError::Storage(format!("failed to encode {key}: {e}"))
    })?;

    store.set(key.as_str(), raw).await
}
