//! Decoder error types.

/// JSON decode failure after both strict and relaxed attempts.
///
/// Carries the strict-mode diagnostic, which is the more useful of the two.
///
/// # Examples
///
/// ```
/// use postcraft_error::DecodeError;
///
/// let err = DecodeError::new("expected `,` or `]`", 1, 9);
/// assert!(err.summary().contains("line 1 column 9"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Decode Error: {} at line {} in {}",
    decode_summary(message, *payload_line, *payload_column, snippet),
    line,
    file
)]
pub struct DecodeError {
    /// Strict-mode parser diagnostic
    pub message: String,
    /// Line of the payload where strict parsing failed
    pub payload_line: usize,
    /// Column of the payload where strict parsing failed
    pub payload_column: usize,
    /// Truncated raw model text
    pub snippet: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new DecodeError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>, payload_line: usize, payload_column: usize) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            payload_line,
            payload_column,
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

    /// Diagnostic plus snippet, without location.
    pub fn summary(&self) -> String {
        decode_summary(
            &self.message,
            self.payload_line,
            self.payload_column,
            &self.snippet,
        )
    }
}

fn decode_summary(message: &str, line: usize, column: usize, snippet: &Option<String>) -> String {
    let base = format!("Invalid JSON: {} at line {} column {}", message, line, column);
    crate::extract::with_snippet_text(&base, snippet)
}
