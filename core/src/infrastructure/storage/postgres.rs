use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};
use crate::entity::kv_entries::{
    ActiveModel as KvEntryActiveModel, Column as KvEntryColumn, Entity as KvEntryEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresKeyValueStore {
    pub db: DatabaseConnection,
}

impl PostgresKeyValueStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl KeyValueStore for PostgresKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entry = KvEntryEntity::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get kv entry {}: {}", key, e);
                CoreError::Storage(format!("failed to read {key}"))
            })?;

        Ok(entry.map(|model| model.value))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let entry = KvEntryActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        KvEntryEntity::insert(entry)
            .on_conflict(
                OnConflict::column(KvEntryColumn::Key)
                    .update_columns([KvEntryColumn::Value, KvEntryColumn::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert kv entry {}: {}", key, e);
                CoreError::Storage(format!("failed to write {key}"))
            })?;

        Ok(())
    }
}
