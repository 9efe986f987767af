use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

/// Process-local store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_entries() {
        let store = InMemoryKeyValueStore::new();
        let other = store.clone();

        store.set("ingredients", "[]".to_string()).await.unwrap();
        assert_eq!(other.get("ingredients").await.unwrap().as_deref(), Some("[]"));
    }
}
