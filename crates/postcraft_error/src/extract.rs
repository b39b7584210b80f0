//! Response extraction error types.

/// Specific error conditions when locating JSON in model output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExtractErrorKind {
    /// No bracket pair of the expected kind was found
    #[display("Response does not appear to contain a valid JSON {} structure", expected)]
    NoStructureFound {
        /// Expected structure ("list" or "object")
        expected: String,
    },
}

/// Extraction error with location tracking and an optional raw-text snippet.
///
/// # Examples
///
/// ```
/// use postcraft_error::{ExtractError, ExtractErrorKind};
///
/// let err = ExtractError::new(ExtractErrorKind::NoStructureFound {
///     expected: "list".to_string(),
/// })
/// .with_snippet("Sorry, I cannot help with that.");
/// assert!(err.summary().contains("Snippet: 'Sorry"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extract Error: {} at line {} in {}", with_snippet_text(&kind.to_string(), snippet), line, file)]
pub struct ExtractError {
    /// The specific error condition
    pub kind: ExtractErrorKind,
    /// Truncated raw model text
    pub snippet: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new ExtractError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
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

pub(crate) fn with_snippet_text(message: &str, snippet: &Option<String>) -> String {
    match snippet {
        Some(snippet) => format!("{}. Snippet: '{}...'", message, snippet),
        None => message.to_string(),
    }
}
