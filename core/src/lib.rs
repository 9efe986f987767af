pub mod application;
pub mod domain;
pub mod entity;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        application::{KvService, build_service},
        domain::{
            common::entities::app_errors::CoreError,
            generation::{ports::LLMClient, safety::SafetySetting},
        },
        infrastructure::{llm::EchoLLMClient, storage::InMemoryKeyValueStore},
    };

    /// Backend that always fails, as an unreachable service would.
    #[derive(Debug, Clone, Copy)]
    pub struct FailingLLMClient;

    impl LLMClient for FailingLLMClient {
        async fn generate_with_text(
            &self,
            _prompt: String,
            _response_schema: serde_json::Value,
            _safety_settings: Vec<SafetySetting>,
        ) -> Result<String, CoreError> {
            Err(CoreError::Generation("service unavailable".to_string()))
        }
    }

    pub fn memory_service() -> KvService<InMemoryKeyValueStore, EchoLLMClient> {
        build_service(InMemoryKeyValueStore::new(), EchoLLMClient)
    }

    pub fn failing_service() -> KvService<InMemoryKeyValueStore, FailingLLMClient> {
        build_service(InMemoryKeyValueStore::new(), FailingLLMClient)
    }
}
