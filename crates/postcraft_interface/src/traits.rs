//! Trait definitions for the external collaborators of the workflow.

use async_trait::async_trait;
use postcraft_core::ChatMessage;
use postcraft_error::{GatewayError, PostcraftResult, StorageError, StorageErrorKind};

/// Black-box text generation service.
///
/// One call to [`invoke`](ModelGateway::invoke) is one external request. Implementations
/// must not retry; the caller decides whether to surface the failure or substitute
/// default content.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send `messages` to `model` and return the raw completion text.
    ///
    /// # Errors
    ///
    /// - `GatewayErrorKind::Config` when credentials are missing (no network access)
    /// - `GatewayErrorKind::InvalidRequest` when `messages` or `model` is empty
    /// - `GatewayErrorKind::Transport` on connection failure, timeout, or non-2xx status
    /// - `GatewayErrorKind::MalformedEnvelope` on a 2xx body that is not a usable envelope
    async fn invoke(&self, messages: &[ChatMessage], model: &str) -> Result<String, GatewayError>;

    /// Provider name (e.g., "openrouter").
    fn provider_name(&self) -> &'static str;
}

/// Opaque key-value session storage.
///
/// Values are JSON-compatible structures. Each token owns its keys exclusively;
/// nothing is shared between sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a value, `None` when the key is absent.
    async fn get(&self, token: &str, key: &str) -> PostcraftResult<Option<serde_json::Value>>;

    /// Write a value, replacing any previous one.
    async fn set(&self, token: &str, key: &str, value: serde_json::Value) -> PostcraftResult<()>;

    /// Remove a value. Removing an absent key is not an error.
    async fn delete(&self, token: &str, key: &str) -> PostcraftResult<()>;
}

/// Reject tokens that cannot name a session.
///
/// # Examples
///
/// ```
/// use postcraft_interface::validate_token;
///
/// assert!(validate_token("5f1c2a").is_ok());
/// assert!(validate_token("  ").is_err());
/// ```
pub fn validate_token(token: &str) -> Result<(), StorageError> {
    if token.trim().is_empty() {
        return Err(StorageError::new(StorageErrorKind::InvalidToken(
            "token is empty".to_string(),
        )));
    }
    if token.chars().any(char::is_control) {
        return Err(StorageError::new(StorageErrorKind::InvalidToken(
            "token contains control characters".to_string(),
        )));
    }
    Ok(())
}
