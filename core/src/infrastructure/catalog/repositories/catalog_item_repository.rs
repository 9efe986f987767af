use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::{
    catalog::{entities::CatalogItem, ports::CatalogItemRepository},
    common::entities::app_errors::CoreError,
    storage::{
        ports::KeyValueStore,
        services::{load_collection, save_collection},
        value_objects::StorageKey,
    },
};

#[derive(Debug, Clone)]
pub struct KvCatalogItemRepository<S: KeyValueStore> {
    store: S,
    write_lock: Arc<Mutex<()>>,
}

impl<S: KeyValueStore> KvCatalogItemRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self) -> Result<Vec<CatalogItem>, CoreError> {
        load_collection(&self.store, StorageKey::CatalogItems).await
    }

    async fn save(&self, items: &[CatalogItem]) -> Result<(), CoreError> {
        save_collection(&self.store, StorageKey::CatalogItems, items).await
    }
}

impl<S: KeyValueStore> CatalogItemRepository for KvCatalogItemRepository<S> {
    async fn fetch_items(&self) -> Result<Vec<CatalogItem>, CoreError> {
        self.load().await
    }

    async fn get_by_code(&self, code: String) -> Result<Option<CatalogItem>, CoreError> {
        let items = self.load().await?;

        Ok(items.into_iter().find(|item| item.code == code))
    }

    async fn create_item(&self, item: CatalogItem) -> Result<CatalogItem, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load().await?;
        if items.iter().any(|existing| existing.code == item.code) {
            warn!(code = %item.code, "catalog code already exists");
            return Err(CoreError::DuplicateKey(item.code));
        }

        items.push(item.clone());
        self.save(&items).await?;

        Ok(item)
    }

    async fn update_item(&self, code: String, item: CatalogItem) -> Result<CatalogItem, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load().await?;
        let position = items
            .iter()
            .position(|existing| existing.code == code)
            .ok_or(CoreError::NotFound)?;

        if item.code != code && items.iter().any(|existing| existing.code == item.code) {
            warn!(code = %item.code, "catalog code already exists");
            return Err(CoreError::DuplicateKey(item.code));
        }

        items[position] = item.clone();
        self.save(&items).await?;

        Ok(item)
    }

    async fn delete_item(&self, code: String) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|existing| existing.code != code);
        if items.len() == before {
            return Err(CoreError::NotFound);
        }

        self.save(&items).await
    }

    async fn seed_if_absent(&self, items: Vec<CatalogItem>) -> Result<bool, CoreError> {
        let _guard = self.write_lock.lock().await;

        if self.store.get(StorageKey::CatalogItems.as_str()).await?.is_some() {
            return Ok(false);
        }

        self.save(&items).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryKeyValueStore;

    fn item(code: &str, description: &str) -> CatalogItem {
        CatalogItem::new(code.to_string(), description.to_string(), "Kg".to_string())
    }

    #[tokio::test]
    async fn duplicate_code_leaves_store_unchanged() {
        let store = InMemoryKeyValueStore::new();
        let repository = KvCatalogItemRepository::new(store.clone());
        repository.create_item(item("FRU-001", "Apple")).await.unwrap();
        let before = store.get("catalog-items").await.unwrap();

        let result = repository.create_item(item("FRU-001", "Pear")).await;

        assert_eq!(result, Err(CoreError::DuplicateKey("FRU-001".to_string())));
        assert_eq!(store.get("catalog-items").await.unwrap(), before);
    }

    #[tokio::test]
    async fn rename_onto_existing_code_is_rejected() {
        let repository = KvCatalogItemRepository::new(InMemoryKeyValueStore::new());
        repository.create_item(item("A", "first")).await.unwrap();
        repository.create_item(item("B", "second")).await.unwrap();

        let result = repository
            .update_item("A".to_string(), item("B", "first"))
            .await;
        assert!(matches!(result, Err(CoreError::DuplicateKey(_))));

        let renamed = repository
            .update_item("A".to_string(), item("C", "first"))
            .await
            .unwrap();
        assert_eq!(renamed.code, "C");
        assert!(repository.get_by_code("A".to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn seed_runs_only_once() {
        let repository = KvCatalogItemRepository::new(InMemoryKeyValueStore::new());

        assert!(repository.seed_if_absent(CatalogItem::demo_items()).await.unwrap());
        repository.delete_item("FRU-001".to_string()).await.unwrap();
        assert!(!repository.seed_if_absent(CatalogItem::demo_items()).await.unwrap());

        assert_eq!(repository.fetch_items().await.unwrap().len(), 2);
    }
}
