use tracing::info;

use crate::domain::{
    catalog::{
        entities::CatalogItem,
        ports::{CatalogItemRepository, CatalogService},
        value_objects::{CreateCatalogItemInput, UpdateCatalogItemInput},
    },
    common::{
        entities::app_errors::{CoreError, ensure_required},
        services::Service,
    },
    generation::ports::LLMClient,
    ingredient::ports::IngredientRepository,
    menu::ports::MenuRepository,
    profile::ports::ProfileRepository,
};

impl<PR, CR, IR, MR, LLM> CatalogService for Service<PR, CR, IR, MR, LLM>
where
    PR: ProfileRepository,
    CR: CatalogItemRepository,
    IR: IngredientRepository,
    MR: MenuRepository,
    LLM: LLMClient,
{
    async fn get_catalog_items(&self) -> Result<Vec<CatalogItem>, CoreError> {
        self.catalog_item_repository.fetch_items().await
    }

    async fn get_catalog_item(&self, code: String) -> Result<CatalogItem, CoreError> {
        self.catalog_item_repository
            .get_by_code(code)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_catalog_item(
        &self,
        input: CreateCatalogItemInput,
    ) -> Result<CatalogItem, CoreError> {
        ensure_required("code", &input.code)?;
        ensure_required("description", &input.description)?;
        ensure_required("unit", &input.unit)?;

        let item = CatalogItem::new(
            input.code.trim().to_string(),
            input.description,
            input.unit,
        );
        let item = self.catalog_item_repository.create_item(item).await?;

        info!(code = %item.code, "catalog item created");
        Ok(item)
    }

    async fn update_catalog_item(
        &self,
        input: UpdateCatalogItemInput,
    ) -> Result<CatalogItem, CoreError> {
        ensure_required("code", &input.new_code)?;
        ensure_required("description", &input.description)?;
        ensure_required("unit", &input.unit)?;

        let item = CatalogItem::new(
            input.new_code.trim().to_string(),
            input.description,
            input.unit,
        );

        self.catalog_item_repository
            .update_item(input.code, item)
            .await
    }

    async fn delete_catalog_item(&self, code: String) -> Result<(), CoreError> {
        self.catalog_item_repository.delete_item(code.clone()).await?;

        info!(code = %code, "catalog item deleted");
        Ok(())
    }
}
