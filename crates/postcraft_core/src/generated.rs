//! Typed outcome for model-generated text fields.
//!
//! A field either holds text the model produced or records that generation
//! failed. The failure still renders as a fixed sentinel string so existing
//! displays keep working, but "did generation succeed" is answered by the type.

use serde::{Deserialize, Serialize};

/// Placeholder text substituted for a field the model could not produce.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Sentinel {
    /// English LinkedIn post missing
    EnglishPost,
    /// English blog article missing
    EnglishArticle,
    /// French LinkedIn post missing
    FrenchPost,
    /// French blog article missing
    FrenchArticle,
}

impl Sentinel {
    /// The user-visible placeholder text.
    pub fn text(self) -> &'static str {
        match self {
            Self::EnglishPost => "Error: Could not generate English LinkedIn post.",
            Self::EnglishArticle => "Error: Could not generate English blog article.",
            Self::FrenchPost => "Error: Could not translate LinkedIn post.",
            Self::FrenchArticle => "Error: Could not translate blog article.",
        }
    }
}

/// Model-produced text, or the sentinel that replaced it.
///
/// # Examples
///
/// ```
/// use postcraft_core::{GeneratedText, Sentinel};
///
/// let ok = GeneratedText::generated("Hello LinkedIn");
/// assert!(!ok.is_failed());
/// assert_eq!(ok.as_str(), "Hello LinkedIn");
///
/// let failed = GeneratedText::failed(Sentinel::EnglishArticle);
/// assert!(failed.is_failed());
/// assert_eq!(failed.as_str(), "Error: Could not generate English blog article.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum GeneratedText {
    /// The model produced this text
    Generated(String),
    /// Generation failed; renders as the sentinel text
    Failed(Sentinel),
}

impl GeneratedText {
    /// Wrap produced text.
    pub fn generated(text: impl Into<String>) -> Self {
        Self::Generated(text.into())
    }

    /// Record a failed field.
    pub fn failed(sentinel: Sentinel) -> Self {
        Self::Failed(sentinel)
    }

    /// Produced text, or the sentinel's text when generation failed.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Generated(text) => text,
            Self::Failed(sentinel) => sentinel.text(),
        }
    }

    /// Produced text only.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Generated(text) => Some(text),
            Self::Failed(_) => None,
        }
    }

    /// Whether this field records a failed generation.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether the field is failed or its text is exactly the given sentinel.
    ///
    /// Catches records where the placeholder text itself was stored as content.
    pub fn is_failed_or(&self, sentinel: Sentinel) -> bool {
        self.is_failed() || self.as_str() == sentinel.text()
    }

    /// Append to produced text; failed fields are left unchanged.
    pub fn append(&mut self, suffix: &str) {
        if let Self::Generated(text) = self {
            text.push_str(suffix);
        }
    }
}

impl std::fmt::Display for Sentinel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

impl std::fmt::Display for GeneratedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_sentinel_display_matches_text() {
        for sentinel in Sentinel::iter() {
            assert_eq!(sentinel.to_string(), sentinel.text());
            assert!(sentinel.text().starts_with("Error: Could not"));
        }
    }

    #[test]
    fn test_append_skips_failed() {
        let mut failed = GeneratedText::failed(Sentinel::EnglishPost);
        failed.append("\n\nRead more: https://example.com/x");
        assert_eq!(failed.as_str(), Sentinel::EnglishPost.text());

        let mut ok = GeneratedText::generated("Post");
        ok.append("!");
        assert_eq!(ok.as_str(), "Post!");
    }

    #[test]
    fn test_generated_sentinel_text_counts_as_failed() {
        let stored = GeneratedText::generated(Sentinel::EnglishArticle.text());
        assert!(!stored.is_failed());
        assert!(stored.is_failed_or(Sentinel::EnglishArticle));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(GeneratedText::failed(Sentinel::FrenchPost)).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["value"], "french_post");

        let json = serde_json::to_value(GeneratedText::generated("Bonjour")).unwrap();
        assert_eq!(json["status"], "generated");
        assert_eq!(json["value"], "Bonjour");
    }
}
