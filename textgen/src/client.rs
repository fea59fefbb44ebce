//! HTTP client for chat completions against an Ollama server.
//!
//! This module provides the [`OllamaChatClient`] type which implements the
//! [`ChatClient`] trait. It issues one non-streaming chat request per call
//! and returns the full reply text.

use crate::traits::{ChatClient, ChatError, SamplingParams};
use async_trait::async_trait;

use ollama_rs::{
    generation::chat::{request::ChatMessageRequest, ChatMessage},
    models::ModelOptions,
    Ollama,
};

pub struct OllamaChatClient {
    inner: Ollama,
}

impl OllamaChatClient {
    /// Connect to the server at `base_url`.
    ///
    /// A malformed URL surfaces as [`ChatError::Network`] so callers can
    /// treat construction failure like any other failed call.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ChatError> {
        let inner =
            Ollama::try_new(base_url.as_ref()).map_err(|e| ChatError::Network(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl ChatClient for OllamaChatClient {
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
        params: SamplingParams,
    ) -> Result<String, ChatError> {
        let options = ModelOptions::default()
            .temperature(params.temperature)
            .num_predict(params.max_tokens as i32);
        let req = ChatMessageRequest::new(
            model.to_string(),
            vec![
                ChatMessage::system(system.to_string()),
                ChatMessage::user(user.to_string()),
            ],
        )
        .options(options);
        let res = self
            .inner
            .send_chat_messages(req)
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        let content = res.message.content;
        if content.trim().is_empty() {
            return Err(ChatError::EmptyResponse);
        }
        Ok(content)
    }
}
