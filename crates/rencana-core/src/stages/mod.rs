//! The three generation stages.
//!
//! A `LessonPlanner` owns the model handle. Each stage builds its prompt and
//! schema, makes exactly one request at a time, and decodes the reply into
//! typed records. Nothing runs concurrently.

mod objectives;
mod plan;
mod sequence;

#[cfg(test)]
mod scripted;

use crate::error::{PlannerError, Result, Stage};
use rencana_abstraction::{Model, ModelParameters};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs the pipeline against a model.
#[derive(Clone)]
pub struct LessonPlanner {
    model: Arc<dyn Model>,
    temperature: Option<f32>,
}

impl std::fmt::Debug for LessonPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LessonPlanner")
            .field("model", &self.model.model_id())
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl LessonPlanner {
    /// Creates a planner that leaves the sampling temperature to the provider.
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self { model, temperature: None }
    }

    /// Overrides the sampling temperature. `None` leaves it to the provider.
    #[must_use]
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model_id(&self) -> &str {
        self.model.model_id()
    }

    /// Sends one structured request and decodes the reply.
    async fn request<T: DeserializeOwned>(&self, stage: Stage, prompt: &str, schema: &Value) -> Result<T> {
        let params = ModelParameters::with_schema(schema).temperature(self.temperature);

        debug!(stage = %stage, model = %self.model.model_id(), prompt_len = prompt.len(), "Sending request");
        let response = self.model.generate_text(prompt, Some(params)).await?;

        if let Some(usage) = response.usage {
            info!(
                stage = %stage,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Response received"
            );
        }

        parse_response(stage, &response.content)
    }
}

/// Decodes a model reply, tolerating a surrounding Markdown code fence.
pub fn parse_response<T: DeserializeOwned>(stage: Stage, raw: &str) -> Result<T> {
    serde_json::from_str(strip_code_fence(raw))
        .map_err(|source| PlannerError::MalformedResponse { stage, source })
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line, which may also hold the payload.
    let body = match body.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &body[4..],
        _ => match body.find('\n') {
            Some(newline) if !body[..newline].trim_start().starts_with(['{', '[']) => &body[newline + 1..],
            _ => body,
        },
    };
    body.trim()
}
