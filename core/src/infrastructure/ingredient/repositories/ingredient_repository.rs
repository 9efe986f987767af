use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Ingredient, ports::IngredientRepository, value_objects::UpdateIngredientInput,
    },
    storage::{
        ports::KeyValueStore,
        services::{load_collection, save_collection},
        value_objects::StorageKey,
    },
};

#[derive(Debug, Clone)]
pub struct KvIngredientRepository<S: KeyValueStore> {
    store: S,
    write_lock: Arc<Mutex<()>>,
}

impl<S: KeyValueStore> KvIngredientRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self) -> Result<Vec<Ingredient>, CoreError> {
        load_collection(&self.store, StorageKey::Ingredients).await
    }

    async fn save(&self, ingredients: &[Ingredient]) -> Result<(), CoreError> {
        save_collection(&self.store, StorageKey::Ingredients, ingredients).await
    }
}

impl<S: KeyValueStore> IngredientRepository for KvIngredientRepository<S> {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, CoreError> {
        self.load().await
    }

    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let ingredients = self.load().await?;

        Ok(ingredients.into_iter().find(|i| i.id == ingredient_id))
    }

    async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut ingredients = self.load().await?;
        ingredients.push(ingredient.clone());
        self.save(&ingredients).await?;

        Ok(ingredient)
    }

    async fn update_ingredient(
        &self,
        input: UpdateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut ingredients = self.load().await?;
        let ingredient = ingredients
            .iter_mut()
            .find(|i| i.id == input.ingredient_id)
            .ok_or(CoreError::NotFound)?;
        ingredient.update(
            input.name,
            input.description,
            input.linked_item_codes,
            input.image_url,
        );
        let ingredient = ingredient.clone();
        self.save(&ingredients).await?;

        Ok(ingredient)
    }

    async fn delete_ingredient(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut ingredients = self.load().await?;
        let before = ingredients.len();
        ingredients.retain(|i| i.id != ingredient_id);
        if ingredients.len() == before {
            return Err(CoreError::NotFound);
        }

        self.save(&ingredients).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::infrastructure::storage::FileKeyValueStore;

    fn patch(ingredient_id: Uuid) -> UpdateIngredientInput {
        UpdateIngredientInput {
            ingredient_id,
            name: None,
            description: None,
            linked_item_codes: None,
            image_url: None,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_partial_updates_keep_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let repository = KvIngredientRepository::new(FileKeyValueStore::new(dir.path()));

        for round in 0..50 {
            let ingredient = Ingredient::new("old".into(), "old".into(), BTreeSet::new(), None);
            let ingredient_id = ingredient.id;
            repository.create_ingredient(ingredient).await.unwrap();

            let rename = {
                let repository = repository.clone();
                tokio::spawn(async move {
                    repository
                        .update_ingredient(UpdateIngredientInput {
                            name: Some(format!("name-{round}")),
                            ..patch(ingredient_id)
                        })
                        .await
                })
            };
            let relink = {
                let repository = repository.clone();
                tokio::spawn(async move {
                    repository
                        .update_ingredient(UpdateIngredientInput {
                            linked_item_codes: Some(BTreeSet::from([format!("CODE-{round}")])),
                            ..patch(ingredient_id)
                        })
                        .await
                })
            };
            rename.await.unwrap().unwrap();
            relink.await.unwrap().unwrap();

            let stored = repository.get_by_id(ingredient_id).await.unwrap().unwrap();
            assert_eq!(stored.name, format!("name-{round}"));
            assert_eq!(
                stored.linked_item_codes,
                BTreeSet::from([format!("CODE-{round}")])
            );
        }
    }

    #[tokio::test]
    async fn updating_unknown_ingredient_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repository = KvIngredientRepository::new(FileKeyValueStore::new(dir.path()));

        assert_eq!(
            repository.update_ingredient(patch(Uuid::now_v7())).await,
            Err(CoreError::NotFound)
        );
    }
}
