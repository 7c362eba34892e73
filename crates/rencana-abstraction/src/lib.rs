//! Model abstraction layer for Rencana.
//!
//! The generation pipeline only ever talks to a [`Model`]. Providers live in
//! `rencana-models`; this crate holds the request/response vocabulary they share.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents an error that can occur when interacting with a language model.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelError {
    /// The request never produced a usable HTTP response (network, DNS, TLS).
    #[error("Request Error: {0}")]
    RequestError(String),

    /// The provider answered, but with an error or without usable content.
    #[error("Model Response Error: {0}")]
    ModelResponseError(String),

    /// A request body or response payload could not be (de)serialized.
    #[error("Serialization Error: {0}")]
    SerializationError(String),

    /// The provider is unknown, or its credentials are missing or rejected.
    #[error("Unsupported Model Provider: {0}")]
    UnsupportedModelProvider(String),

    /// Provider quota exceeded or rate limit hit.
    #[error("Provider '{provider}' quota exceeded{}", message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    QuotaExceeded {
        /// The provider name (e.g. "gemini").
        provider: String,
        /// Optional error message from the provider.
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Other unexpected errors.
    #[error("Other Model Error: {0}")]
    Other(String),
}

/// A single turn in a conversation with a chat model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender ("user", "assistant" or "system").
    pub role: String,
    /// The content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Builds a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }

    /// Builds a system instruction.
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }
}

/// Shape the model is asked to answer in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseFormat {
    /// Free-form text.
    Text,
    /// Any JSON value.
    Json,
    /// JSON conforming to the given schema (serialized JSON Schema / OpenAPI subset).
    JsonSchema(String),
}

/// Parameters for controlling the model's generation.
///
/// Unset fields are left to the provider's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Sampling temperature, between 0 and 2.
    pub temperature: Option<f32>,

    /// Requested output shape.
    pub response_format: Option<ResponseFormat>,
}

impl ModelParameters {
    /// Parameters that constrain the answer to `schema`.
    #[must_use]
    pub fn with_schema(schema: &serde_json::Value) -> Self {
        Self {
            response_format: Some(ResponseFormat::JsonSchema(schema.to_string())),
            ..Self::default()
        }
    }

    /// Overrides the sampling temperature.
    #[must_use]
    pub fn temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Returns the parsed schema when the response format carries one.
    ///
    /// # Errors
    /// Returns `SerializationError` when the stored schema is not valid JSON.
    pub fn schema(&self) -> Result<Option<serde_json::Value>, ModelError> {
        match &self.response_format {
            Some(ResponseFormat::JsonSchema(raw)) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| ModelError::SerializationError(format!("Invalid JSON schema: {e}"))),
            _ => Ok(None),
        }
    }
}

/// The response from a text generation or chat completion model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    /// The generated content.
    pub content: String,

    /// The ID of the model that answered, when the provider reports it.
    pub model_id: Option<String>,

    /// Token accounting, when the provider reports it.
    pub usage: Option<ModelUsage>,
}

/// Usage statistics for a model request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelUsage {
    /// Number of tokens in the prompt.
    pub prompt_tokens: u32,

    /// Number of tokens in the completion.
    pub completion_tokens: u32,

    /// Total number of tokens used.
    pub total_tokens: u32,
}

/// A trait for interacting with language models.
///
/// All models must be `Send + Sync` so a planner can hold them behind an `Arc`.
#[async_trait]
pub trait Model: Send + Sync {
    /// Generates a completion for a single prompt.
    ///
    /// # Errors
    /// Returns a `ModelError` if generation fails.
    async fn generate_text(
        &self,
        prompt: &str,
        parameters: Option<ModelParameters>,
    ) -> Result<ModelResponse, ModelError>;

    /// Generates a completion for a conversation.
    ///
    /// # Errors
    /// Returns a `ModelError` if generation fails.
    async fn generate_chat_completion(
        &self,
        messages: &[ChatMessage],
        parameters: Option<ModelParameters>,
    ) -> Result<ModelResponse, ModelError>;

    /// Returns the ID of the model.
    fn model_id(&self) -> &str;
}
