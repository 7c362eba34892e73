//! Model factory for creating model instances from configuration.

use crate::{GeminiModel, MockModel};
use rencana_abstraction::{Model, ModelError};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Model type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    /// Offline mock model.
    Mock,
    /// Google Gemini model.
    Gemini,
}

impl FromStr for ModelType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "gemini" | "google" => Ok(Self::Gemini),
            other => Err(ModelError::UnsupportedModelProvider(format!(
                "unknown engine '{other}' (expected gemini or mock)"
            ))),
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mock => f.write_str("mock"),
            Self::Gemini => f.write_str("gemini"),
        }
    }
}

/// Model configuration.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// The type of model to create.
    pub model_type: ModelType,
    /// The model ID (e.g. "gemini-2.5-pro").
    pub model_id: String,
    /// API key; when absent it is read from the environment.
    pub api_key: Option<String>,
    /// Endpoint override.
    pub base_url: Option<String>,
}

impl ModelConfig {
    /// Creates a new `ModelConfig` with the given type and model ID.
    #[must_use]
    pub fn new(model_type: ModelType, model_id: String) -> Self {
        Self { model_type, model_id, api_key: None, base_url: None }
    }

    /// Sets the API key for this configuration.
    #[must_use]
    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the endpoint for this configuration.
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }
}

/// Factory for creating model instances.
pub struct ModelFactory;

impl ModelFactory {
    /// Creates a model instance from the given configuration.
    ///
    /// # Errors
    /// Returns a `ModelError` if model creation fails (e.g. missing API key).
    pub fn create(config: ModelConfig) -> Result<Arc<dyn Model>, ModelError> {
        debug!(
            model_type = %config.model_type,
            model_id = %config.model_id,
            "Creating model instance"
        );

        match config.model_type {
            ModelType::Mock => Ok(Arc::new(MockModel::new(config.model_id))),
            ModelType::Gemini => {
                let model = match config.api_key {
                    Some(api_key) => GeminiModel::with_api_key(config.model_id, api_key),
                    None => GeminiModel::new(config.model_id)?,
                };
                let model = match config.base_url {
                    Some(url) => model.with_base_url(url),
                    None => model,
                };
                Ok(Arc::new(model))
            }
        }
    }
}
