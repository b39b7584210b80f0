//! Locating the JSON payload inside raw model text.
//!
//! Models asked for "only JSON" still add markdown fences, a friendly preamble,
//! or a closing remark. None of that should abort the pipeline, so the
//! extractor peels fences off and then slices between the outermost brackets
//! of the expected kind.

use postcraft_core::StructureKind;
use postcraft_error::{ExtractError, ExtractErrorKind};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, error};

/// A whole-text fenced block: opening fence, optional language tag, body, closing fence.
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A```[ \t]*[A-Za-z0-9_+.\-]*[ \t]*\r?\n?(.*?)\r?\n?[ \t]*```\z")
        .expect("fence pattern is valid")
});

/// Extract the JSON list or object from raw model text.
///
/// Steps:
/// 1. Trim surrounding whitespace
/// 2. Strip a fenced code block wrapping the whole text (with or without language tag)
/// 3. Unless the text already starts and ends with the expected brackets, slice from
///    the first opening bracket to the last closing bracket, inclusive
///
/// # Errors
///
/// Returns `ExtractErrorKind::NoStructureFound` if no bracket pair of the expected kind
/// exists. The error carries a snippet of `raw`.
///
/// # Examples
///
/// ```
/// use postcraft_core::StructureKind;
/// use postcraft_response::extract;
///
/// let raw = "```json\n[{\"title\": \"A\"}]\n```";
/// assert_eq!(extract(raw, StructureKind::List).unwrap(), "[{\"title\": \"A\"}]");
///
/// let raw = "Sure! Here it is: {\"linkedin_post\": \"Hi\"} Enjoy.";
/// assert_eq!(extract(raw, StructureKind::Object).unwrap(), "{\"linkedin_post\": \"Hi\"}");
/// ```
pub fn extract(raw: &str, expected: StructureKind) -> Result<&str, ExtractError> {
    let trimmed = raw.trim();
    let unfenced = strip_fence(trimmed);

    let (open, close) = (expected.open(), expected.close());
    if unfenced.starts_with(open) && unfenced.ends_with(close) {
        return Ok(unfenced);
    }

    match (unfenced.find(open), unfenced.rfind(close)) {
        (Some(start), Some(end)) if end > start => {
            debug!(
                expected = %expected,
                skipped_prefix = start,
                skipped_suffix = unfenced.len() - end - 1,
                "Sliced JSON out of surrounding text"
            );
            Ok(&unfenced[start..=end])
        }
        _ => {
            error!(
                expected = %expected,
                response_length = raw.len(),
                "No JSON structure found in model response"
            );
            Err(ExtractError::new(ExtractErrorKind::NoStructureFound {
                expected: expected.to_string(),
            })
            .with_snippet(raw))
        }
    }
}

/// Remove a markdown fence wrapping the entire text; otherwise return it unchanged.
fn strip_fence(text: &str) -> &str {
    match FENCE.captures(text).and_then(|c| c.get(1)) {
        Some(body) => body.as_str().trim(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfenced_list_passes_through() {
        let raw = "  [1, 2, 3]\n";
        assert_eq!(extract(raw, StructureKind::List).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn test_fence_without_language_tag() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(extract(raw, StructureKind::Object).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_fence_with_other_language_tag() {
        let raw = "```JSON\n[\"x\"]\n```";
        assert_eq!(extract(raw, StructureKind::List).unwrap(), "[\"x\"]");

        let raw = "```javascript\n{\"a\": 1}\n```";
        assert_eq!(extract(raw, StructureKind::Object).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_single_line_fence() {
        let raw = "```[1]```";
        assert_eq!(extract(raw, StructureKind::List).unwrap(), "[1]");
    }

    #[test]
    fn test_fence_inside_prose() {
        let raw = r#"
Here's the JSON you requested:

```json
[
  {"id": 1}
]
```

Hope this helps!
"#;
        let json = extract(raw, StructureKind::List).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
        assert!(json.contains("\"id\": 1"));
    }

    #[test]
    fn test_outermost_brackets_are_used() {
        let raw = "Result: {\"outer\": {\"inner\": true}} (object above)";
        assert_eq!(
            extract(raw, StructureKind::Object).unwrap(),
            "{\"outer\": {\"inner\": true}}"
        );
    }

    #[test]
    fn test_wrong_structure_kind_fails() {
        let raw = "{\"a\": 1}";
        let err = extract(raw, StructureKind::List).unwrap_err();
        assert_eq!(
            err.kind,
            ExtractErrorKind::NoStructureFound {
                expected: "list".to_string()
            }
        );
        assert_eq!(err.snippet.as_deref(), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_reversed_brackets_fail() {
        assert!(extract("] nothing here [", StructureKind::List).is_err());
    }

    #[test]
    fn test_plain_text_fails() {
        assert!(extract("This is just plain text with no JSON", StructureKind::Object).is_err());
        assert!(extract("", StructureKind::List).is_err());
    }

    #[test]
    fn test_multibyte_text_around_payload() {
        let raw = "Voici le résultat — {\"linkedin_post_fr\": \"Bonjour à tous\"} ✓";
        assert_eq!(
            extract(raw, StructureKind::Object).unwrap(),
            "{\"linkedin_post_fr\": \"Bonjour à tous\"}"
        );
    }
}
