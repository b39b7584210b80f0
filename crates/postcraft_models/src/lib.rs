//! Model gateway implementations for Postcraft.
//!
//! # Available Providers
//!
//! - **OpenRouter** - OpenAI-compatible chat completions endpoint
//!
//! # Example
//!
//! ```no_run
//! use postcraft_core::ChatMessage;
//! use postcraft_interface::ModelGateway;
//! use postcraft_models::{OpenRouterClient, OpenRouterConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OpenRouterConfig::builder()
//!     .api_key(std::env::var("OPENROUTER_API_KEY").ok())
//!     .build()?;
//! let client = OpenRouterClient::new(config)?;
//! let text = client
//!     .invoke(&[ChatMessage::user("Hello")], "deepseek/deepseek-chat")
//!     .await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openrouter;

pub use openrouter::{
    ApiErrorBody, ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder,
    ChatCompletionResponse, ChoiceMessage, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS,
    OpenRouterClient, OpenRouterConfig, OpenRouterConfigBuilder, parse_envelope,
};
