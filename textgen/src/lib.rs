//! Abstractions for chat-style text generation.
//!
//! The `textgen` crate defines a [`ChatClient`] trait along with the concrete
//! [`OllamaChatClient`] implementation. A chat exchange is always a single
//! system message followed by a single user message; responses are returned
//! whole rather than streamed.

pub mod client;
pub mod traits;

pub use client::OllamaChatClient;
pub use traits::{ChatClient, ChatError, SamplingParams};
