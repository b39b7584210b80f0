//! Static topic catalog.
//!
//! The catalog is loaded once at startup and never mutated. The bundled
//! catalog ships inside the binary; alternative catalogs can be parsed from
//! TOML with the same layout.

use postcraft_error::{ConfigError, PostcraftResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// A topic the user can pick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topic {
    /// Grouping category (e.g. "networking")
    pub category: String,
    /// Unique title
    pub title: String,
    /// Ordered keywords
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    topics: Vec<Topic>,
}

/// Immutable set of topics keyed by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

impl TopicCatalog {
    /// The catalog bundled with the library.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_core::TopicCatalog;
    ///
    /// let catalog = TopicCatalog::bundled().unwrap();
    /// assert_eq!(catalog.topics().len(), 8);
    /// assert!(catalog.find("VPN Explained Simply").is_some());
    /// ```
    pub fn bundled() -> PostcraftResult<Self> {
        const BUNDLED_TOPICS: &str = include_str!("../topics.toml");
        Self::from_toml_str(BUNDLED_TOPICS)
    }

    /// Parse a catalog from TOML (`[[topics]]` tables).
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TOML is invalid, a title is blank,
    /// or two topics share a title.
    #[instrument(skip(toml_str), fields(len = toml_str.len()))]
    pub fn from_toml_str(toml_str: &str) -> PostcraftResult<Self> {
        let file: CatalogFile = toml::from_str(toml_str)
            .map_err(|e| ConfigError::new(format!("Failed to parse topic catalog: {}", e)))?;
        Self::new(file.topics)
    }

    /// Build a catalog from topics, enforcing unique non-blank titles.
    pub fn new(topics: Vec<Topic>) -> PostcraftResult<Self> {
        let mut seen = HashSet::new();
        for topic in &topics {
            if topic.title.trim().is_empty() {
                return Err(ConfigError::new("Topic catalog contains a blank title").into());
            }
            if !seen.insert(topic.title.as_str()) {
                return Err(ConfigError::new(format!(
                    "Topic catalog contains duplicate title: {}",
                    topic.title
                ))
                .into());
            }
        }
        debug!(count = topics.len(), "Loaded topic catalog");
        Ok(Self { topics })
    }

    /// All topics in catalog order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Look up a topic by exact title.
    pub fn find(&self, title: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.title == title)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.topics
            .iter()
            .map(|t| t.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}
