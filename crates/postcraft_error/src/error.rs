//! Top-level error wrapper types.

use crate::{
    ConfigError, DecodeError, ExtractError, GatewayError, JsonError, SessionError, ShapeError,
    StorageError,
};

/// Every error condition a Postcraft operation can report.
///
/// # Examples
///
/// ```
/// use postcraft_error::{PostcraftError, ConfigError};
///
/// let err: PostcraftError = ConfigError::new("no key").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PostcraftErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Model gateway failure
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// No JSON structure found in model output
    #[from(ExtractError)]
    Extract(ExtractError),
    /// Model output is not decodable JSON
    #[from(DecodeError)]
    Decode(DecodeError),
    /// Decoded data has the wrong shape
    #[from(ShapeError)]
    Shape(ShapeError),
    /// State machine precondition violated
    #[from(SessionError)]
    Session(SessionError),
    /// Session storage failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Session value serialization failure
    #[from(JsonError)]
    Json(JsonError),
}

/// Postcraft error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Postcraft Error: {}", _0)]
pub struct PostcraftError(Box<PostcraftErrorKind>);

impl PostcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: PostcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostcraftErrorKind {
        &self.0
    }

    /// Whether the failure is a configuration problem (credential missing, bad config file).
    pub fn is_config(&self) -> bool {
        match self.kind() {
            PostcraftErrorKind::Config(_) => true,
            PostcraftErrorKind::Gateway(e) => e.is_config(),
            _ => false,
        }
    }

    /// Single-line, human-readable message without source locations.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_error::{PostcraftError, SessionError, SessionErrorKind};
    ///
    /// let err: PostcraftError =
    ///     SessionError::new(SessionErrorKind::TopicNotFound("Knitting".to_string())).into();
    /// assert_eq!(err.user_message(), "Topic not found: Knitting");
    /// ```
    pub fn user_message(&self) -> String {
        let message = match self.kind() {
            PostcraftErrorKind::Config(e) => format!("Configuration error: {}", e.message),
            PostcraftErrorKind::Gateway(e) => e.kind.to_string(),
            PostcraftErrorKind::Extract(e) => e.summary(),
            PostcraftErrorKind::Decode(e) => e.summary(),
            PostcraftErrorKind::Shape(e) => e.summary(),
            PostcraftErrorKind::Session(e) => e.kind.to_string(),
            PostcraftErrorKind::Storage(e) => e.kind.to_string(),
            PostcraftErrorKind::Json(e) => format!("JSON error: {}", e.message),
        };
        message.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

// Generic From implementation for any type that converts to PostcraftErrorKind
impl<T> From<T> for PostcraftError
where
    T: Into<PostcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Postcraft operations.
pub type PostcraftResult<T> = std::result::Result<T, PostcraftError>;
