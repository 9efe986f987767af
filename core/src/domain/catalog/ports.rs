use std::future::Future;

use crate::domain::{
    catalog::{
        entities::CatalogItem,
        value_objects::{CreateCatalogItemInput, UpdateCatalogItemInput},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait CatalogService: Send + Sync {
    fn get_catalog_items(&self) -> impl Future<Output = Result<Vec<CatalogItem>, CoreError>> + Send;

    fn get_catalog_item(
        &self,
        code: String,
    ) -> impl Future<Output = Result<CatalogItem, CoreError>> + Send;

    fn create_catalog_item(
        &self,
        input: CreateCatalogItemInput,
    ) -> impl Future<Output = Result<CatalogItem, CoreError>> + Send;

    fn update_catalog_item(
        &self,
        input: UpdateCatalogItemInput,
    ) -> impl Future<Output = Result<CatalogItem, CoreError>> + Send;

    fn delete_catalog_item(&self, code: String)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CatalogItemRepository: Send + Sync {
    fn fetch_items(&self) -> impl Future<Output = Result<Vec<CatalogItem>, CoreError>> + Send;

    fn get_by_code(
        &self,
        code: String,
    ) -> impl Future<Output = Result<Option<CatalogItem>, CoreError>> + Send;

    /// Fails with [`CoreError::DuplicateKey`] without writing when the code exists.
    fn create_item(
        &self,
        item: CatalogItem,
    ) -> impl Future<Output = Result<CatalogItem, CoreError>> + Send;

    /// Replaces the item stored under `code`, which may be renamed to `item.code`.
    fn update_item(
        &self,
        code: String,
        item: CatalogItem,
    ) -> impl Future<Output = Result<CatalogItem, CoreError>> + Send;

    fn delete_item(&self, code: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Writes `items` only if the collection has never been stored.
    fn seed_if_absent(
        &self,
        items: Vec<CatalogItem>,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
