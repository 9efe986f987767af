use tracing::info;
use uuid::Uuid;

use crate::domain::{
    catalog::ports::CatalogItemRepository,
    common::{
        entities::app_errors::{CoreError, ensure_required},
        services::Service,
    },
    generation::ports::LLMClient,
    ingredient::{
        entities::{Ingredient, IngredientDetails},
        ports::{IngredientRepository, IngredientService},
        value_objects::{CreateIngredientInput, UpdateIngredientInput},
    },
    menu::ports::MenuRepository,
    profile::ports::ProfileRepository,
};

impl<PR, CR, IR, MR, LLM> IngredientService for Service<PR, CR, IR, MR, LLM>
where
    PR: ProfileRepository,
    CR: CatalogItemRepository,
    IR: IngredientRepository,
    MR: MenuRepository,
    LLM: LLMClient,
{
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, CoreError> {
        self.ingredient_repository.fetch_ingredients().await
    }

    async fn get_ingredient(&self, ingredient_id: Uuid) -> Result<Ingredient, CoreError> {
        self.ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_ingredient_details(
        &self,
        ingredient_id: Uuid,
    ) -> Result<IngredientDetails, CoreError> {
        let ingredient = self.get_ingredient(ingredient_id).await?;
        let catalog = self.catalog_item_repository.fetch_items().await?;

        Ok(IngredientDetails::resolve(ingredient, &catalog))
    }

    async fn create_ingredient(
        &self,
        input: CreateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        ensure_required("name", &input.name)?;

        let image_url = input.image_url.filter(|url| !url.trim().is_empty());
        let ingredient = Ingredient::new(
            input.name,
            input.description,
            input.linked_item_codes,
            image_url,
        );
        let ingredient = self
            .ingredient_repository
            .create_ingredient(ingredient)
            .await?;

        info!(ingredient_id = %ingredient.id, "ingredient created");
        Ok(ingredient)
    }

    async fn update_ingredient(
        &self,
        input: UpdateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        if let Some(name) = &input.name {
            ensure_required("name", name)?;
        }

        self.ingredient_repository.update_ingredient(input).await
    }

    async fn delete_ingredient(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        self.ingredient_repository
            .delete_ingredient(ingredient_id)
            .await?;

        info!(ingredient_id = %ingredient_id, "ingredient deleted");
        Ok(())
    }
}
