//! Session state machine error types.

/// Precondition violations on state machine transitions.
///
/// Each of these means the user must restart from an earlier stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// Requested topic title is not in the catalog
    #[display("Topic not found: {}", _0)]
    TopicNotFound(String),
    /// Idea index outside `[0, len)`
    #[display("Invalid idea selected: index {} is out of range for {} generated ideas", index, len)]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of stored ideas
        len: usize,
    },
    /// Stored English content is missing or carries an error sentinel
    #[display(
        "Required English content fields are missing or contain errors. Please regenerate the English content."
    )]
    InvalidPriorContent,
    /// Operation attempted before its prerequisite stage was reached
    #[display("Cannot {} before {}. Please start over by selecting a topic.", operation, required)]
    StageNotReached {
        /// Operation that was attempted
        operation: String,
        /// Stage that must be reached first
        required: String,
    },
}

/// Session error with location tracking.
///
/// # Examples
///
/// ```
/// use postcraft_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::IndexOutOfRange { index: 7, len: 5 });
/// assert!(format!("{}", err).contains("index 7"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The specific error condition
    pub kind: SessionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
