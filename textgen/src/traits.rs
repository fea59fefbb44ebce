use async_trait::async_trait;
use thiserror::Error;

/// Sampling settings for a single completion request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    /// Cap on generated output tokens.
    pub max_tokens: u32,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// A client capable of one-shot chat completions.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a system message and a user message, returning the model's reply.
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
        params: SamplingParams,
    ) -> Result<String, ChatError>;
}
