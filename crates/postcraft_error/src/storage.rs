//! Session storage error types.

/// Kinds of session storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write session record
    #[display("Failed to write session record: {}", _0)]
    FileWrite(String),
    /// Failed to read session record
    #[display("Failed to read session record: {}", _0)]
    FileRead(String),
    /// Failed to delete session record
    #[display("Failed to delete session record: {}", _0)]
    FileDelete(String),
    /// Session record exists but cannot be parsed
    #[display("Corrupt session record: {}", _0)]
    Corrupt(String),
    /// Session token is empty or otherwise unusable
    #[display("Invalid session token: {}", _0)]
    InvalidToken(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use postcraft_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::InvalidToken("empty".to_string()));
/// assert!(format!("{}", err).contains("Invalid session token"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
