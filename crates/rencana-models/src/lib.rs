//! Model implementations for Rencana.
//!
//! # Supported Providers
//!
//! - **Mock**: offline, deterministic; answers structured requests with a
//!   sample that satisfies the requested schema
//! - **Gemini**: Google's Gemini models (API key required)

pub mod factory;
pub mod gemini;
mod sample;

use async_trait::async_trait;
use rencana_abstraction::{ChatMessage, Model, ModelError, ModelParameters, ModelResponse, ModelUsage};
use tracing::debug;

pub use factory::{ModelConfig, ModelFactory, ModelType};
pub use gemini::GeminiModel;
pub use sample::sample_for;

/// A mock implementation of the `Model` trait for tests and dry runs.
#[derive(Debug, Default)]
pub struct MockModel {
    id: String,
}

impl MockModel {
    /// Creates a new `MockModel` with the given ID.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Model for MockModel {
    async fn generate_text(
        &self,
        prompt: &str,
        parameters: Option<ModelParameters>,
    ) -> Result<ModelResponse, ModelError> {
        self.generate_chat_completion(&[ChatMessage::user(prompt)], parameters).await
    }

    async fn generate_chat_completion(
        &self,
        messages: &[ChatMessage],
        parameters: Option<ModelParameters>,
    ) -> Result<ModelResponse, ModelError> {
        debug!(
            model_id = %self.id,
            message_count = messages.len(),
            "MockModel generating chat completion"
        );

        let schema = match &parameters {
            Some(params) => params.schema()?,
            None => None,
        };

        let response_content = match schema {
            Some(schema) => serde_json::to_string(&sample_for(&schema))
                .map_err(|e| ModelError::SerializationError(e.to_string()))?,
            None => {
                let last = messages.last().map(|m| m.content.as_str()).unwrap_or_default();
                format!("Mock response for: {last}\nModel ID: {}", self.id)
            }
        };

        let prompt_tokens = messages.iter().map(|m| count_tokens(&m.content)).sum::<u32>();
        let completion_tokens = count_tokens(&response_content);

        Ok(ModelResponse {
            content: response_content,
            model_id: Some(self.id.clone()),
            usage: Some(ModelUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            }),
        })
    }

    fn model_id(&self) -> &str {
        &self.id
    }
}

/// Count tokens in a string (simplified: word count).
fn count_tokens(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}
