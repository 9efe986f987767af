use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::{Profile, ProfileType},
        ports::ProfileRepository,
        value_objects::UpdateProfileInput,
    },
    storage::{
        ports::KeyValueStore,
        services::{load_collection, save_collection},
    },
};

/// Profiles of each type live in their own collection.
#[derive(Debug, Clone)]
pub struct KvProfileRepository<S: KeyValueStore> {
    store: S,
    write_lock: Arc<Mutex<()>>,
}

impl<S: KeyValueStore> KvProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self, profile_type: ProfileType) -> Result<Vec<Profile>, CoreError> {
        load_collection(&self.store, profile_type.storage_key()).await
    }

    async fn save(&self, profile_type: ProfileType, profiles: &[Profile]) -> Result<(), CoreError> {
        save_collection(&self.store, profile_type.storage_key(), profiles).await
    }
}

impl<S: KeyValueStore> ProfileRepository for KvProfileRepository<S> {
    async fn fetch_profiles(&self, profile_type: ProfileType) -> Result<Vec<Profile>, CoreError> {
        self.load(profile_type).await
    }

    async fn get_profile_by_id(
        &self,
        profile_type: ProfileType,
        profile_id: Uuid,
    ) -> Result<Option<Profile>, CoreError> {
        let profiles = self.load(profile_type).await?;

        Ok(profiles.into_iter().find(|p| p.id == profile_id))
    }

    async fn create_profile(&self, profile: Profile) -> Result<Profile, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut profiles = self.load(profile.profile_type).await?;
        profiles.push(profile.clone());
        self.save(profile.profile_type, &profiles).await?;

        Ok(profile)
    }

    async fn update_profile(&self, input: UpdateProfileInput) -> Result<Profile, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut profiles = self.load(input.profile_type).await?;
        let profile = profiles
            .iter_mut()
            .find(|p| p.id == input.profile_id)
            .ok_or(CoreError::NotFound)?;
        profile.update(input.name, input.rules);
        let profile = profile.clone();
        self.save(input.profile_type, &profiles).await?;

        Ok(profile)
    }

    async fn delete_profile(
        &self,
        profile_type: ProfileType,
        profile_id: Uuid,
    ) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut profiles = self.load(profile_type).await?;
        let before = profiles.len();
        profiles.retain(|p| p.id != profile_id);
        if profiles.len() == before {
            return Err(CoreError::NotFound);
        }

        self.save(profile_type, &profiles).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::{FileKeyValueStore, InMemoryKeyValueStore};

    #[tokio::test]
    async fn profile_types_are_stored_separately() {
        let store = InMemoryKeyValueStore::new();
        let repository = KvProfileRepository::new(store.clone());

        let service = Profile::new(ProfileType::Service, "Kids".into(), "small portions".into());
        repository.create_profile(service.clone()).await.unwrap();

        assert_eq!(
            repository.fetch_profiles(ProfileType::Service).await.unwrap(),
            vec![service]
        );
        assert!(
            repository
                .fetch_profiles(ProfileType::Pathology)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(store.get("service-profiles").await.unwrap().is_some());
        assert!(store.get("pathology-profiles").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_unknown_profile_is_not_found() {
        let repository = KvProfileRepository::new(InMemoryKeyValueStore::new());

        assert_eq!(
            repository
                .delete_profile(ProfileType::Pathology, Uuid::now_v7())
                .await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn undecodable_collection_is_a_storage_error() {
        let store = InMemoryKeyValueStore::new();
        store
            .set("service-profiles", "not json".to_string())
            .await
            .unwrap();
        let repository = KvProfileRepository::new(store);

        assert!(matches!(
            repository.fetch_profiles(ProfileType::Service).await,
            Err(CoreError::Storage(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_partial_updates_keep_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let repository = KvProfileRepository::new(FileKeyValueStore::new(dir.path()));

        for round in 0..50 {
            let profile = Profile::new(ProfileType::Pathology, "old".into(), "old".into());
            let profile_id = profile.id;
            repository.create_profile(profile).await.unwrap();

            let rename = {
                let repository = repository.clone();
                tokio::spawn(async move {
                    repository
                        .update_profile(UpdateProfileInput {
                            profile_type: ProfileType::Pathology,
                            profile_id,
                            name: Some(format!("name-{round}")),
                            rules: None,
                        })
                        .await
                })
            };
            let rewrite = {
                let repository = repository.clone();
                tokio::spawn(async move {
                    repository
                        .update_profile(UpdateProfileInput {
                            profile_type: ProfileType::Pathology,
                            profile_id,
                            name: None,
                            rules: Some(format!("rules-{round}")),
                        })
                        .await
                })
            };
            rename.await.unwrap().unwrap();
            rewrite.await.unwrap().unwrap();

            let stored = repository
                .get_profile_by_id(ProfileType::Pathology, profile_id)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(stored.name, format!("name-{round}"));
            assert_eq!(stored.rules, format!("rules-{round}"));
        }
    }
}
