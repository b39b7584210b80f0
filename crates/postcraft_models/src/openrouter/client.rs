use crate::{ChatCompletionRequest, parse_envelope};
use async_trait::async_trait;
use derive_builder::Builder;
use derive_getters::Getters;
use postcraft_core::ChatMessage;
use postcraft_error::{GatewayError, GatewayErrorKind};
use postcraft_interface::ModelGateway;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Fixed chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Upper bound on a single request, so a hung call cannot block a stage forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Connection settings for [`OpenRouterClient`].
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenRouterConfig {
    /// Bearer token; `None` disables every call
    #[builder(default)]
    api_key: Option<String>,
    /// Chat-completions URL
    #[builder(default = "DEFAULT_ENDPOINT.to_string()")]
    endpoint: String,
    /// Request timeout in seconds
    #[builder(default = "DEFAULT_TIMEOUT_SECS")]
    timeout_secs: u64,
}

impl OpenRouterConfig {
    /// Creates a new builder for `OpenRouterConfig`.
    pub fn builder() -> OpenRouterConfigBuilder {
        OpenRouterConfigBuilder::default()
    }
}

/// OpenRouter API client.
///
/// Performs exactly one HTTP request per [`invoke`](ModelGateway::invoke); there is no retry.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl OpenRouterClient {
    /// Creates a new OpenRouter client.
    ///
    /// A missing API key is accepted here; it surfaces as a configuration
    /// error on the first invocation.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: OpenRouterConfig) -> Result<Self, GatewayError> {
        debug!(
            endpoint = %config.endpoint,
            timeout_secs = config.timeout_secs,
            "Creating new OpenRouter client"
        );
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                GatewayError::new(GatewayErrorKind::Config(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        let api_key = config.api_key.filter(|key| !key.trim().is_empty());

        Ok(Self {
            client,
            api_key,
            endpoint: config.endpoint,
        })
    }

    /// Whether a credential is configured.
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate inputs and credential without touching the network.
    fn prepare(
        &self,
        messages: &[ChatMessage],
        model: &str,
    ) -> Result<(String, ChatCompletionRequest), GatewayError> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            error!("OpenRouter API key not found");
            GatewayError::new(GatewayErrorKind::Config(
                "OpenRouter API key not found. Set OPENROUTER_API_KEY.".to_string(),
            ))
        })?;

        if messages.is_empty() {
            return Err(GatewayError::new(GatewayErrorKind::InvalidRequest(
                "at least one message is required".to_string(),
            )));
        }
        if model.trim().is_empty() {
            return Err(GatewayError::new(GatewayErrorKind::InvalidRequest(
                "model identifier is empty".to_string(),
            )));
        }

        let request = ChatCompletionRequest::builder()
            .model(model)
            .messages(messages.to_vec())
            .build()
            .map_err(|e| GatewayError::new(GatewayErrorKind::InvalidRequest(e.to_string())))?;

        Ok((api_key, request))
    }
}

#[async_trait]
impl ModelGateway for OpenRouterClient {
    #[instrument(skip(self, messages), fields(message_count = messages.len()))]
    async fn invoke(&self, messages: &[ChatMessage], model: &str) -> Result<String, GatewayError> {
        let (api_key, request) = self.prepare(messages, model)?;

        debug!("Sending request to OpenRouter");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, model, "API request error");
                let message = if e.is_timeout() {
                    format!("request timed out: {}", e)
                } else {
                    format!("request failed: {}", e)
                };
                GatewayError::new(GatewayErrorKind::Transport {
                    message,
                    status: e.status().map(|s| s.as_u16()),
                    body: None,
                })
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            error!(status = %status, body = ?body, model, "OpenRouter returned error status");
            return Err(GatewayError::new(GatewayErrorKind::Transport {
                message: "upstream returned an error status".to_string(),
                status: Some(status.as_u16()),
                body,
            }));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            GatewayError::new(GatewayErrorKind::Transport {
                message: format!("failed to read response body: {}", e),
                status: Some(status.as_u16()),
                body: None,
            })
        })?;

        parse_envelope(&body)
    }

    fn provider_name(&self) -> &'static str {
        "openrouter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> OpenRouterClient {
        let config = OpenRouterConfig::builder()
            .api_key(api_key.map(str::to_string))
            // Unroutable endpoint: any test that reaches the network fails loudly.
            .endpoint("http://127.0.0.1:9/unreachable")
            .timeout_secs(1u64)
            .build()
            .unwrap();
        OpenRouterClient::new(config).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = OpenRouterConfig::builder().build().unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(*config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        assert!(!client(Some("   ")).has_credentials());
        assert!(client(Some("sk-or-1")).has_credentials());
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let err = client(None)
            .invoke(&[ChatMessage::user("hi")], "deepseek/deepseek-chat")
            .await
            .unwrap_err();
        assert!(err.is_config());
    }

    #[tokio::test]
    async fn test_empty_messages_rejected() {
        let err = client(Some("sk-or-1"))
            .invoke(&[], "deepseek/deepseek-chat")
            .await
            .unwrap_err();
        assert!(matches!(err.kind, GatewayErrorKind::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_empty_model_rejected() {
        let err = client(Some("sk-or-1"))
            .invoke(&[ChatMessage::user("hi")], " ")
            .await
            .unwrap_err();
        assert!(matches!(err.kind, GatewayErrorKind::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport() {
        let err = client(Some("sk-or-1"))
            .invoke(&[ChatMessage::user("hi")], "deepseek/deepseek-chat")
            .await
            .unwrap_err();
        assert!(matches!(
            err.kind,
            GatewayErrorKind::Transport { status: None, .. }
        ));
    }
}
