//! OpenRouter chat-completions data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use postcraft_core::ChatMessage;
use postcraft_error::{GatewayError, GatewayErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Request body `{model, messages}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Ordered conversation messages
    messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// Message inside a completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChoiceMessage {
    /// Role reported by the provider
    #[serde(default)]
    role: Option<String>,
    /// Completion text
    #[serde(default)]
    content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// The generated message
    message: ChoiceMessage,
}

/// Error object some providers return inside a 2xx envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ApiErrorBody {
    /// Error type, when given
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    /// Numeric or string code, when given
    #[serde(default)]
    code: Option<serde_json::Value>,
    /// Human-readable message
    #[serde(default)]
    message: Option<String>,
}

impl ApiErrorBody {
    /// `API Error (<type>): <message>` with the original defaults for missing parts.
    pub fn describe(&self) -> String {
        let error_type = self
            .error_type
            .clone()
            .or_else(|| {
                self.code.as_ref().map(|c| match c {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
            })
            .unwrap_or_else(|| "Unknown".to_string());
        let message = self.message.as_deref().unwrap_or("No details");
        format!("API Error ({}): {}", error_type, message)
    }
}

/// Top-level completion envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Response identifier
    #[serde(default)]
    id: Option<String>,
    /// Completion choices
    #[serde(default)]
    choices: Vec<ChatChoice>,
    /// Provider error, when present
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

/// Extract the first choice's text from a 2xx response body.
///
/// # Errors
///
/// Returns `GatewayErrorKind::MalformedEnvelope` when the body is not valid
/// top-level JSON, has no choices, or the first choice has no text.
///
/// # Examples
///
/// ```
/// use postcraft_models::parse_envelope;
///
/// let body = r#"{"choices":[{"message":{"role":"assistant","content":"[1,2]"}}]}"#;
/// assert_eq!(parse_envelope(body).unwrap(), "[1,2]");
///
/// assert!(parse_envelope("<html>Bad Gateway</html>").is_err());
/// ```
pub fn parse_envelope(body: &str) -> Result<String, GatewayError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, body = %body, "Response text failed to parse as JSON");
        GatewayError::new(GatewayErrorKind::MalformedEnvelope(format!(
            "response body is not valid JSON: {}",
            e
        )))
    })?;

    let envelope: ChatCompletionResponse = serde_json::from_value(value).map_err(|e| {
        GatewayError::new(GatewayErrorKind::MalformedEnvelope(format!(
            "unexpected envelope layout: {}",
            e
        )))
    })?;

    if let Some(choice) = envelope.choices.first() {
        return match choice.message.content.as_deref() {
            Some(content) => {
                debug!(
                    response_id = ?envelope.id,
                    content_len = content.len(),
                    "Parsed completion envelope"
                );
                Ok(content.to_string())
            }
            None => Err(GatewayError::new(GatewayErrorKind::MalformedEnvelope(
                "first choice has no message content".to_string(),
            ))),
        };
    }

    let detail = match &envelope.error {
        Some(api_error) => api_error.describe(),
        None => "response contains no choices".to_string(),
    };
    error!(detail = %detail, "Completion envelope carried no choices");
    Err(GatewayError::new(GatewayErrorKind::MalformedEnvelope(detail)))
}
