use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Severity of a [`Notice`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    /// Recovered; the stage result is usable
    Warning,
    /// Part of the stage failed; the result is degraded
    Error,
}

/// A single-line message for the user produced while running a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Notice {
    /// Severity
    level: NoticeLevel,
    /// Human-readable text
    message: String,
}

impl Notice {
    /// Warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

/// Result of a stage together with the notices it raised.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StageReport<T> {
    /// Stage output
    value: T,
    /// Warnings and errors, in the order raised
    notices: Vec<Notice>,
}

impl<T> StageReport<T> {
    /// Wrap a stage output.
    pub fn new(value: T, notices: Vec<Notice>) -> Self {
        Self { value, notices }
    }

    /// Whether any error-level notice was raised.
    pub fn has_errors(&self) -> bool {
        self.notices
            .iter()
            .any(|notice| notice.level == NoticeLevel::Error)
    }

    /// Take the stage output.
    pub fn into_value(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_display() {
        assert_eq!(
            Notice::warning("parsed leniently").to_string(),
            "warning: parsed leniently"
        );
        assert_eq!(Notice::error("no article").to_string(), "error: no article");
    }

    #[test]
    fn test_has_errors() {
        let report = StageReport::new((), vec![Notice::warning("w")]);
        assert!(!report.has_errors());
        let report = StageReport::new((), vec![Notice::warning("w"), Notice::error("e")]);
        assert!(report.has_errors());
    }
}
