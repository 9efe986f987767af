use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::{ports::LLMClient, safety::SafetySetting},
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        )
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::Generation(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::Generation(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::Generation(format!("Failed to parse LLM response: {}", e))
        })?;

        first_candidate_text(gemini_response)
    }
}

fn first_candidate_text(response: GeminiResponse) -> Result<String, CoreError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| {
            tracing::error!("Gemini API returned no candidates");
            CoreError::Generation("No response from LLM".to_string())
        })
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
        safety_settings: Vec<SafetySetting>,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
            safety_settings,
        };

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::generation::safety::daily_menu_safety_settings;

    #[test]
    fn endpoint_uses_configured_base_url() {
        let client = GeminiLLMClient::new(
            "k3y".to_string(),
            "gemini-2.0-flash".to_string(),
            "http://localhost:8089/".to_string(),
        );

        assert_eq!(
            client.endpoint(),
            "http://localhost:8089/v1beta/models/gemini-2.0-flash:generateContent?key=k3y"
        );
    }

    #[test]
    fn request_declares_json_response_mode() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: json!({"type": "object"}),
            }),
            safety_settings: Vec::new(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            body["generation_config"]["response_mime_type"],
            "application/json"
        );
        assert!(body.get("safety_settings").is_none());
    }

    #[test]
    fn request_carries_safety_thresholds() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "menu for a renal diet".to_string(),
                }],
            }],
            generation_config: None,
            safety_settings: daily_menu_safety_settings(),
        };

        let body = serde_json::to_value(&request).unwrap();
        let settings = body["safety_settings"].as_array().unwrap();
        assert_eq!(settings.len(), 4);
        assert!(settings.contains(&json!({
            "category": "HARM_CATEGORY_DANGEROUS_CONTENT",
            "threshold": "BLOCK_NONE"
        })));
    }

    #[test]
    fn extracts_first_candidate_text() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "{\"menu\":\"oats\"}"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();

        assert_eq!(first_candidate_text(response).unwrap(), "{\"menu\":\"oats\"}");
    }

    #[test]
    fn empty_candidate_list_is_a_generation_error() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();

        assert!(matches!(
            first_candidate_text(response),
            Err(CoreError::Generation(_))
        ));
    }
}
