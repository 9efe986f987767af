use crate::domain::{
    common::{LLMConfig, LLMProvider, entities::app_errors::CoreError},
    generation::{ports::LLMClient, safety::SafetySetting},
};

pub mod echo_client;
pub mod gemini_client;

pub use echo_client::EchoLLMClient;
pub use gemini_client::GeminiLLMClient;

/// Text-generation backend selected at start-up.
#[derive(Debug, Clone)]
pub enum AnyLLMClient {
    Gemini(GeminiLLMClient),
    Echo(EchoLLMClient),
}

impl AnyLLMClient {
    pub fn from_config(config: &LLMConfig) -> Self {
        match config.provider {
            LLMProvider::Gemini => AnyLLMClient::Gemini(GeminiLLMClient::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
            )),
            LLMProvider::Echo => AnyLLMClient::Echo(EchoLLMClient),
        }
    }
}

impl LLMClient for AnyLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
        safety_settings: Vec<SafetySetting>,
    ) -> Result<String, CoreError> {
        match self {
            AnyLLMClient::Gemini(client) => {
                client
                    .generate_with_text(prompt, response_schema, safety_settings)
                    .await
            }
            AnyLLMClient::Echo(client) => {
                client
                    .generate_with_text(prompt, response_schema, safety_settings)
                    .await
            }
        }
    }
}
