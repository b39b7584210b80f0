//! OpenRouter chat-completions gateway.

mod client;
mod dto;

pub use client::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, OpenRouterClient, OpenRouterConfig,
    OpenRouterConfigBuilder,
};
pub use dto::{
    ApiErrorBody, ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder,
    ChatCompletionResponse, ChoiceMessage, parse_envelope,
};
