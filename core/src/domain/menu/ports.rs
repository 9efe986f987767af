use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::value_objects::SuggestionSet,
    menu::{
        entities::{DateRange, ScheduledMenu},
        value_objects::{GenerateMenuInput, SetMenuInput},
    },
};

pub trait MenuService: Send + Sync {
    fn get_menu(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Option<ScheduledMenu>, CoreError>> + Send;

    fn set_menu(
        &self,
        input: SetMenuInput,
    ) -> impl Future<Output = Result<ScheduledMenu, CoreError>> + Send;

    fn list_menus(
        &self,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<ScheduledMenu>, CoreError>> + Send;

    /// Generate a menu for the date from two profiles and store it.
    fn generate_menu(
        &self,
        input: GenerateMenuInput,
    ) -> impl Future<Output = Result<ScheduledMenu, CoreError>> + Send;

    /// Alternative-food suggestions for the menu stored on `date`.
    fn generate_suggestions(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<SuggestionSet, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MenuRepository: Send + Sync {
    fn get_menu(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Option<ScheduledMenu>, CoreError>> + Send;

    /// Insert or replace the entry keyed by `menu.date`.
    fn set_menu(
        &self,
        menu: ScheduledMenu,
    ) -> impl Future<Output = Result<ScheduledMenu, CoreError>> + Send;

    /// Menus within `range`, sorted by date ascending.
    fn list_menus(
        &self,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<ScheduledMenu>, CoreError>> + Send;
}
