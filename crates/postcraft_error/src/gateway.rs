//! Model gateway error types.

/// Specific failure conditions of a single model gateway invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GatewayErrorKind {
    /// Credential or other configuration missing; no request was sent
    #[display("Configuration error: {}", _0)]
    Config(String),
    /// Request rejected before sending (empty messages or model)
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Connection failure, timeout, or non-2xx status
    #[display("{}", transport_message(message, *status, body))]
    Transport {
        /// Description of the failure
        message: String,
        /// Upstream HTTP status, when a response was received
        status: Option<u16>,
        /// Upstream response body, when available
        body: Option<String>,
    },
    /// 2xx response whose body is not a usable completion envelope
    #[display("Malformed response envelope: {}", _0)]
    MalformedEnvelope(String),
}

fn transport_message(message: &str, status: Option<u16>, body: &Option<String>) -> String {
    let mut out = format!("Transport error: {}", message);
    if let Some(status) = status {
        out.push_str(&format!(" (status {})", status));
    }
    if let Some(body) = body.as_deref().filter(|b| !b.trim().is_empty()) {
        out.push_str(&format!(": {}", crate::snippet(body)));
    }
    out
}

/// Model gateway error with location tracking.
///
/// # Examples
///
/// ```
/// use postcraft_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::Transport {
///     message: "request failed".to_string(),
///     status: Some(502),
///     body: Some("bad gateway".to_string()),
/// });
/// assert!(format!("{}", err).contains("status 502"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The specific error condition
    pub kind: GatewayErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this failure happened before any network access.
    pub fn is_config(&self) -> bool {
        matches!(self.kind, GatewayErrorKind::Config(_))
    }
}
