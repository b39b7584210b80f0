//! Error types for the Postcraft content workflow.
//!
//! This crate provides the foundation error types used throughout the Postcraft workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Locations are for logs. Use [`PostcraftError::user_message`] for text shown to a user.
//!
//! # Examples
//!
//! ```
//! use postcraft_error::{PostcraftResult, ConfigError};
//!
//! fn load_key() -> PostcraftResult<String> {
//!     Err(ConfigError::new("OPENROUTER_API_KEY is not set"))?
//! }
//!
//! let err = load_key().unwrap_err();
//! assert_eq!(err.user_message(), "Configuration error: OPENROUTER_API_KEY is not set");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod decode;
mod error;
mod extract;
mod gateway;
mod json;
mod session;
mod shape;
mod storage;

pub use config::ConfigError;
pub use decode::DecodeError;
pub use error::{PostcraftError, PostcraftErrorKind, PostcraftResult};
pub use extract::{ExtractError, ExtractErrorKind};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use json::JsonError;
pub use session::{SessionError, SessionErrorKind};
pub use shape::{ShapeError, ShapeErrorKind};
pub use storage::{StorageError, StorageErrorKind};

/// Maximum number of characters of raw model text kept for diagnostics.
pub const SNIPPET_LEN: usize = 200;

/// Truncate raw model text to a diagnostic snippet of at most [`SNIPPET_LEN`] characters.
///
/// Newlines are flattened so the snippet fits a single-line message.
///
/// # Examples
///
/// ```
/// use postcraft_error::snippet;
///
/// assert_eq!(snippet("  [1,\n2]  "), "[1, 2]");
/// assert_eq!(snippet(&"x".repeat(500)).len(), 200);
/// assert_eq!(snippet(""), "N/A");
/// ```
pub fn snippet(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "N/A".to_string();
    }
    trimmed
        .chars()
        .take(SNIPPET_LEN)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
