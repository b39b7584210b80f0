//! Shape validation error types.

use crate::extract::with_snippet_text;

/// Specific error conditions when decoded data has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ShapeErrorKind {
    /// Decoded value is not a list
    #[display("Parsed data for {} is not a list as expected", _0)]
    ExpectedList(String),
    /// Decoded value is not an object
    #[display("Parsed data for {} is not an object as expected", _0)]
    ExpectedObject(String),
    /// Every element was rejected
    #[display("No valid {} found in the parsed response, or the list was empty", _0)]
    EmptyResult(String),
}

/// Shape validation error with location tracking and an optional raw-text snippet.
///
/// # Examples
///
/// ```
/// use postcraft_error::{ShapeError, ShapeErrorKind};
///
/// let err = ShapeError::new(ShapeErrorKind::EmptyResult("ideas".to_string()));
/// assert!(format!("{}", err).contains("No valid ideas"));
///
/// let err = err.with_snippet("[{\"title\": \"\"}]");
/// assert!(err.summary().ends_with("Snippet: '[{\"title\": \"\"}]...'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Shape Error: {} at line {} in {}", with_snippet_text(&kind.to_string(), snippet), line, file)]
pub struct ShapeError {
    /// The specific error condition
    pub kind: ShapeErrorKind,
    /// Truncated raw model text
    pub snippet: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ShapeError {
    /// Create a new ShapeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ShapeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            snippet: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach a diagnostic snippet of the raw model text.
    pub fn with_snippet(mut self, raw: &str) -> Self {
        self.snippet = Some(crate::snippet(raw));
        self
    }

    /// Kind message plus snippet, without location.
    pub fn summary(&self) -> String {
        with_snippet_text(&self.kind.to_string(), &self.snippet)
    }
}
