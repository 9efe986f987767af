use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{DateRange, ScheduledMenu},
        ports::MenuRepository,
    },
    storage::{
        ports::KeyValueStore,
        services::{load_collection, save_collection},
        value_objects::StorageKey,
    },
};

#[derive(Debug, Clone)]
pub struct KvMenuRepository<S: KeyValueStore> {
    store: S,
    write_lock: Arc<Mutex<()>>,
}

impl<S: KeyValueStore> KvMenuRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self) -> Result<Vec<ScheduledMenu>, CoreError> {
        load_collection(&self.store, StorageKey::ScheduledMenus).await
    }
}

impl<S: KeyValueStore> MenuRepository for KvMenuRepository<S> {
    async fn get_menu(&self, date: NaiveDate) -> Result<Option<ScheduledMenu>, CoreError> {
        let menus = self.load().await?;

        Ok(menus.into_iter().find(|m| m.date == date))
    }

    async fn set_menu(&self, menu: ScheduledMenu) -> Result<ScheduledMenu, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut menus = self.load().await?;
        menus.retain(|m| m.date != menu.date);
        menus.push(menu.clone());
        menus.sort_by_key(|m| m.date);
        save_collection(&self.store, StorageKey::ScheduledMenus, &menus).await?;

        Ok(menu)
    }

    async fn list_menus(&self, range: DateRange) -> Result<Vec<ScheduledMenu>, CoreError> {
        let mut menus: Vec<_> = self
            .load()
            .await?
            .into_iter()
            .filter(|m| range.contains(m.date))
            .collect();
        menus.sort_by_key(|m| m.date);

        Ok(menus)
    }
}
