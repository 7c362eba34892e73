//! A model that replays canned replies and records what it was asked.

use async_trait::async_trait;
use rencana_abstraction::{ChatMessage, Model, ModelError, ModelParameters, ModelResponse};
use std::collections::VecDeque;
use std::sync::Mutex;

pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, ModelError>>>,
    pub prompts: Mutex<Vec<String>>,
    pub params: Mutex<Vec<Option<ModelParameters>>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<String, ModelError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
            params: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok((*r).to_string())).collect())
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Model for ScriptedModel {
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
        self.prompts.lock().unwrap().push(messages.last().map(|m| m.content.clone()).unwrap_or_default());
        self.params.lock().unwrap().push(parameters);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ModelError::Other("script exhausted".to_string())))?;
        Ok(ModelResponse { content: reply, model_id: Some("scripted".to_string()), usage: None })
    }

    fn model_id(&self) -> &str {
        "scripted"
    }
}
