use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{Ingredient, IngredientDetails},
        value_objects::{CreateIngredientInput, UpdateIngredientInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn get_ingredients(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn get_ingredient_details(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<IngredientDetails, CoreError>> + Send;

    fn create_ingredient(
        &self,
        input: CreateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        input: UpdateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn fetch_ingredients(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn create_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    /// Applies the given fields to the stored ingredient in one locked read-modify-write.
    fn update_ingredient(
        &self,
        input: UpdateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
