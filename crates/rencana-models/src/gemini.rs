//! Google Gemini model implementation.
//!
//! Talks to the `generateContent` REST endpoint. Structured output is requested
//! through `responseMimeType` + `responseSchema`, which is how every planning
//! stage keeps its answer consumable by the next one.

use async_trait::async_trait;
use rencana_abstraction::{
    ChatMessage, Model, ModelError, ModelParameters, ModelResponse, ModelUsage, ResponseFormat,
};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, warn};

/// Default REST endpoint for the Gemini API.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Google Gemini model implementation.
#[derive(Debug, Clone)]
pub struct GeminiModel {
    /// The model ID (e.g. "gemini-2.5-pro").
    model_id: String,
    /// The API key for authentication.
    api_key: String,
    /// The base URL for the Gemini API.
    base_url: String,
    /// HTTP client for making requests.
    client: Client,
}

impl GeminiModel {
    /// Creates a new `GeminiModel`, reading the key from `GEMINI_API_KEY` or `API_KEY`.
    ///
    /// # Errors
    /// Returns `UnsupportedModelProvider` if neither variable is set.
    pub fn new(model_id: String) -> Result<Self, ModelError> {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| {
                ModelError::UnsupportedModelProvider(
                    "GEMINI_API_KEY (or API_KEY) environment variable not set".to_string(),
                )
            })?;

        Ok(Self::with_api_key(model_id, api_key))
    }

    /// Creates a new `GeminiModel` with an explicit API key.
    #[must_use]
    pub fn with_api_key(model_id: String, api_key: String) -> Self {
        Self { model_id, api_key, base_url: GEMINI_BASE_URL.to_string(), client: Client::new() }
    }

    /// Points the client at a different endpoint (proxies, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Converts a chat role to Gemini's vocabulary.
    ///
    /// System messages never reach this point; they travel in `systemInstruction`.
    fn role_to_gemini(role: &str) -> String {
        match role {
            "assistant" => "model".to_string(),
            _ => role.to_string(),
        }
    }

    /// Joins all system messages with a blank line, or `None` if there are none.
    fn extract_system_messages(messages: &[ChatMessage]) -> Option<String> {
        let system: Vec<&str> = messages
            .iter()
            .filter(|msg| msg.role == "system")
            .map(|msg| msg.content.as_str())
            .collect();

        if system.is_empty() { None } else { Some(system.join("\n\n")) }
    }

    fn build_request(
        messages: &[ChatMessage],
        parameters: Option<ModelParameters>,
    ) -> Result<GeminiRequest, ModelError> {
        let contents = messages
            .iter()
            .filter(|msg| msg.role != "system")
            .map(|msg| GeminiContent {
                role: Self::role_to_gemini(&msg.role),
                parts: vec![GeminiPart { text: msg.content.clone() }],
            })
            .collect();

        let system_instruction = Self::extract_system_messages(messages)
            .map(|text| GeminiSystemInstruction { parts: vec![GeminiPart { text }] });

        let generation_config = match parameters {
            Some(params) => {
                let response_schema = params.schema().inspect_err(|e| {
                    error!(error = %e, "Invalid JSON schema in response_format");
                })?;
                let response_mime_type = match params.response_format {
                    Some(ResponseFormat::Json | ResponseFormat::JsonSchema(_)) => {
                        Some("application/json".to_string())
                    }
                    Some(ResponseFormat::Text) | None => None,
                };

                Some(GeminiGenerationConfig {
                    temperature: params.temperature,
                    response_mime_type,
                    response_schema,
                })
            }
            None => None,
        };

        Ok(GeminiRequest { contents, generation_config, system_instruction })
    }

    /// Maps a non-success status to the matching `ModelError`.
    fn status_error(status: StatusCode, body: String) -> ModelError {
        match status.as_u16() {
            402 | 429 => {
                let lower = body.to_lowercase();
                if !(lower.contains("resource_exhausted")
                    || lower.contains("quota")
                    || lower.contains("rate limit"))
                {
                    warn!(status = %status, "Rate limited without a quota marker in body");
                }
                ModelError::QuotaExceeded { provider: "gemini".to_string(), message: Some(body) }
            }
            401 | 403 => ModelError::UnsupportedModelProvider(format!(
                "Authentication failed ({}): {}",
                status, body
            )),
            500..=599 => ModelError::ModelResponseError(format!("Server error ({}): {}", status, body)),
            _ => ModelError::ModelResponseError(format!("API error ({}): {}", status, body)),
        }
    }
}

#[async_trait]
impl Model for GeminiModel {
    async fn generate_text(
        &self,
        prompt: &str,
        parameters: Option<ModelParameters>,
    ) -> Result<ModelResponse, ModelError> {
        debug!(
            model_id = %self.model_id,
            prompt_len = prompt.len(),
            "GeminiModel generating text"
        );

        self.generate_chat_completion(&[ChatMessage::user(prompt)], parameters).await
    }

    async fn generate_chat_completion(
        &self,
        messages: &[ChatMessage],
        parameters: Option<ModelParameters>,
    ) -> Result<ModelResponse, ModelError> {
        debug!(
            model_id = %self.model_id,
            message_count = messages.len(),
            structured = parameters.as_ref().is_some_and(|p| p.response_format.is_some()),
            "GeminiModel generating chat completion"
        );

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model_id);
        let request_body = Self::build_request(messages, parameters)?;

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send request to Gemini API");
                ModelError::RequestError(format!("Network error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Gemini API returned error status");
            return Err(Self::status_error(status, error_text));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse Gemini API response");
            ModelError::SerializationError(format!("Failed to parse response: {}", e))
        })?;

        let candidate = gemini_response.candidates.first().ok_or_else(|| {
            error!("No candidates in Gemini API response");
            ModelError::ModelResponseError("No content in API response".to_string())
        })?;

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if reason != "STOP" {
                warn!(finish_reason = reason, "Gemini candidate finished early");
            }
        }

        // Long JSON answers can arrive split across several parts.
        let content: String = candidate
            .content
            .as_ref()
            .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default();

        if content.is_empty() {
            error!("No text content in Gemini API response");
            return Err(ModelError::ModelResponseError(
                "No text content in API response".to_string(),
            ));
        }

        let usage = gemini_response.usage_metadata.map(|meta| ModelUsage {
            prompt_tokens: meta.prompt_token_count.unwrap_or(0),
            completion_tokens: meta.candidates_token_count.unwrap_or(0),
            total_tokens: meta.total_token_count.unwrap_or(0),
        });

        Ok(ModelResponse { content, model_id: Some(self.model_id.clone()), usage })
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

// Gemini API request/response structures

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_field_names)] // Matches API naming
struct GeminiUsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
    total_token_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn mock_model(server: &mockito::Server) -> GeminiModel {
        GeminiModel::with_api_key("test-model".to_string(), "test-key".to_string())
            .with_base_url(server.url())
    }

    #[test]
    fn test_role_conversion() {
        assert_eq!(GeminiModel::role_to_gemini("user"), "user");
        assert_eq!(GeminiModel::role_to_gemini("assistant"), "model");
    }

    #[test]
    fn test_extract_system_messages() {
        let messages = vec![
            ChatMessage::system("First instruction."),
            ChatMessage::system("Second instruction."),
            ChatMessage::user("Hello"),
        ];
        assert_eq!(
            GeminiModel::extract_system_messages(&messages),
            Some("First instruction.\n\nSecond instruction.".to_string())
        );
        assert_eq!(GeminiModel::extract_system_messages(&[ChatMessage::user("Hello")]), None);
    }

    #[test]
    fn test_request_serialization_with_schema() {
        let schema = json!({"type": "ARRAY", "items": {"type": "STRING"}});
        let request = GeminiModel::build_request(
            &[ChatMessage::system("Be terse."), ChatMessage::user("List topics")],
            Some(ModelParameters::with_schema(&schema)),
        )
        .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"].as_array().unwrap().len(), 1);
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "Be terse.");
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"], schema);
        assert!(value["generationConfig"].get("temperature").is_none());
    }

    #[test]
    fn test_request_without_parameters_omits_config() {
        let request = GeminiModel::build_request(&[ChatMessage::user("Hi")], None).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("generationConfig").is_none());
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            GeminiModel::status_error(StatusCode::TOO_MANY_REQUESTS, "RESOURCE_EXHAUSTED".into()),
            ModelError::QuotaExceeded { .. }
        ));
        assert!(matches!(
            GeminiModel::status_error(StatusCode::FORBIDDEN, "bad key".into()),
            ModelError::UnsupportedModelProvider(_)
        ));
        assert!(matches!(
            GeminiModel::status_error(StatusCode::BAD_GATEWAY, "upstream".into()),
            ModelError::ModelResponseError(msg) if msg.starts_with("Server error")
        ));
    }

    #[test]
    fn test_gemini_model_creation_with_api_key() {
        let model = GeminiModel::with_api_key("gemini-2.5-pro".to_string(), "k".to_string())
            .with_base_url("http://localhost:9999/v1beta/");
        assert_eq!(model.model_id(), "gemini-2.5-pro");
        assert_eq!(model.base_url, "http://localhost:9999/v1beta");
    }

    #[tokio::test]
    async fn test_generate_text_against_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/test-model:generateContent")
            .match_query(Matcher::UrlEncoded("key".to_string(), "test-key".to_string()))
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "candidates": [{
                        "content": {"role": "model", "parts": [{"text": "[\"a\","}, {"text": "\"b\"]"}]},
                        "finishReason": "STOP"
                    }],
                    "usageMetadata": {"promptTokenCount": 7, "candidatesTokenCount": 5, "totalTokenCount": 12}
                }"#,
            )
            .create_async()
            .await;

        let model = mock_model(&server);
        let params = ModelParameters::with_schema(&json!({"type": "ARRAY"}));
        let response = model.generate_text("topics", Some(params)).await.unwrap();

        assert_eq!(response.content, r#"["a","b"]"#);
        assert_eq!(response.model_id.as_deref(), Some("test-model"));
        assert_eq!(response.usage.unwrap().total_tokens, 12);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_quota_status_maps_to_quota_exceeded() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/test-model:generateContent")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body(r#"{"error": {"status": "RESOURCE_EXHAUSTED"}}"#)
            .create_async()
            .await;

        let err = mock_model(&server).generate_text("hi", None).await.unwrap_err();
        assert!(matches!(err, ModelError::QuotaExceeded { provider, .. } if provider == "gemini"));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_response_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/test-model:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let err = mock_model(&server).generate_text("hi", None).await.unwrap_err();
        assert_eq!(err, ModelError::ModelResponseError("No content in API response".to_string()));
    }
}
