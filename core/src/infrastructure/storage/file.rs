use std::{io::ErrorKind, path::PathBuf};

use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

/// One `<key>.json` document per key inside `data_dir`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CoreError::Storage(format!("invalid storage key: {key:?}")));
        }

        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                Err(CoreError::Storage(format!("failed to read {key}: {e}")))
            }
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        tokio::fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            error!("Failed to create data dir {}: {}", self.data_dir.display(), e);
            CoreError::Storage(format!("failed to create data directory: {e}"))
        })?;

        tokio::fs::write(&tmp_path, value).await.map_err(|e| {
            error!("Failed to write {}: {}", tmp_path.display(), e);
            CoreError::Storage(format!("failed to write {key}: {e}"))
        })?;

        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            error!("Failed to replace {}: {}", path.display(), e);
            CoreError::Storage(format!("failed to write {key}: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn values_survive_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("data"));

        assert_eq!(store.get("catalog-items").await.unwrap(), None);
        store
            .set("catalog-items", r#"[{"code":"A"}]"#.to_string())
            .await
            .unwrap();

        let reopened = FileKeyValueStore::new(dir.path().join("data"));
        assert_eq!(
            reopened.get("catalog-items").await.unwrap().as_deref(),
            Some(r#"[{"code":"A"}]"#)
        );
        assert!(dir.path().join("data/catalog-items.json").exists());
        assert!(!dir.path().join("data/catalog-items.json.tmp").exists());
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("never-created"));

        assert_eq!(store.get("ingredients").await.unwrap(), None);
    }

    #[tokio::test]
    async fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        assert!(matches!(
            store.get("../etc/passwd").await,
            Err(CoreError::Storage(_))
        ));
    }
}
