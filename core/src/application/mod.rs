use tracing::info;

use crate::{
    domain::{
        catalog::{entities::CatalogItem, ports::CatalogItemRepository},
        common::{MenuPlanConfig, StorageConfig, services::Service},
        generation::ports::LLMClient,
        storage::ports::KeyValueStore,
    },
    infrastructure::{
        catalog::repositories::catalog_item_repository::KvCatalogItemRepository,
        db::postgres::Postgres,
        ingredient::repositories::ingredient_repository::KvIngredientRepository,
        llm::AnyLLMClient,
        menu::repositories::menu_repository::KvMenuRepository,
        profile::repositories::profile_repository::KvProfileRepository,
        storage::{
            AnyKeyValueStore, FileKeyValueStore, InMemoryKeyValueStore, PostgresKeyValueStore,
        },
    },
};

pub type KvService<S, LLM> = Service<
    KvProfileRepository<S>,
    KvCatalogItemRepository<S>,
    KvIngredientRepository<S>,
    KvMenuRepository<S>,
    LLM,
>;

pub type MenuPlanService = KvService<AnyKeyValueStore, AnyLLMClient>;

/// Wire every repository onto one shared store.
pub fn build_service<S, LLM>(store: S, llm_client: LLM) -> KvService<S, LLM>
where
    S: KeyValueStore + Clone,
    LLM: LLMClient,
{
    Service::new(
        KvProfileRepository::new(store.clone()),
        KvCatalogItemRepository::new(store.clone()),
        KvIngredientRepository::new(store.clone()),
        KvMenuRepository::new(store),
        llm_client,
    )
}

pub async fn create_service(config: MenuPlanConfig) -> Result<MenuPlanService, anyhow::Error> {
    let store = match &config.storage {
        StorageConfig::Memory => AnyKeyValueStore::Memory(InMemoryKeyValueStore::new()),
        StorageConfig::File { data_dir } => {
            info!(data_dir = %data_dir.display(), "using file storage");
            AnyKeyValueStore::File(FileKeyValueStore::new(data_dir.clone()))
        }
        StorageConfig::Postgres(database) => {
            let postgres = Postgres::new(database).await?;
            AnyKeyValueStore::Postgres(PostgresKeyValueStore::new(postgres.get_db()))
        }
    };

    let llm_client = AnyLLMClient::from_config(&config.llm);
    let service = build_service(store, llm_client);

    if config.seed_catalog
        && service
            .catalog_item_repository
            .seed_if_absent(CatalogItem::demo_items())
            .await?
    {
        info!("demo catalog items written");
    }

    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        catalog::ports::CatalogService,
        common::{LLMConfig, LLMProvider},
    };

    fn config(seed_catalog: bool) -> MenuPlanConfig {
        MenuPlanConfig {
            storage: StorageConfig::Memory,
            llm: LLMConfig {
                provider: LLMProvider::Echo,
                gemini_api_key: String::new(),
                gemini_model: "gemini-2.0-flash".to_string(),
                gemini_base_url: String::new(),
            },
            seed_catalog,
        }
    }

    #[tokio::test]
    async fn seeds_demo_catalog_when_enabled() {
        let service = create_service(config(true)).await.unwrap();

        let codes: Vec<_> = service
            .get_catalog_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.code)
            .collect();
        assert_eq!(codes, vec!["FRU-001", "VEG-002", "PRO-003"]);
    }

    #[tokio::test]
    async fn catalog_starts_empty_without_seed() {
        let service = create_service(config(false)).await.unwrap();

        assert!(service.get_catalog_items().await.unwrap().is_empty());
    }
}
