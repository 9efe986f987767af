use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::{ports::LLMClient, safety::SafetySetting},
};

/// Offline backend that answers with the prompt itself, shaped to the
/// declared schema: string fields get the whole prompt, string arrays get
/// its non-blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoLLMClient;

impl EchoLLMClient {
    fn echo(prompt: &str, schema: &Value) -> Value {
        match schema.get("type").and_then(Value::as_str) {
            Some("object") => {
                let properties = schema
                    .get("properties")
                    .and_then(Value::as_object)
                    .map(|props| {
                        props
                            .iter()
                            .map(|(name, field)| (name.clone(), Self::echo(prompt, field)))
                            .collect::<Map<String, Value>>()
                    })
                    .unwrap_or_default();
                Value::Object(properties)
            }
            Some("array") => Value::Array(
                prompt
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(|line| Value::String(line.to_string()))
                    .collect(),
            ),
            _ => Value::String(prompt.to_string()),
        }
    }
}

impl LLMClient for EchoLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
        _safety_settings: Vec<SafetySetting>,
    ) -> Result<String, CoreError> {
        let reply = Self::echo(&prompt, &response_schema);

        serde_json::to_string(&reply).map_err(|e| {
            tracing::error!("Failed to encode echo reply: {}", e);
            CoreError::Generation(format!("failed to encode echo reply: {e}"))
        })
    }
}
