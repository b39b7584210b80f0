//! Post ideas produced by the model.

use serde::{Deserialize, Serialize};

/// Slug used when an idea carries no usable slug.
pub const DEFAULT_SLUG: &str = "my-default-blog-post";

/// One candidate post idea.
///
/// Only ideas with all three fields non-empty survive validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Idea {
    /// Catchy post title
    pub title: String,
    /// One or two sentence summary
    pub summary: String,
    /// Suggested blog URL slug
    pub slug: String,
}

impl Idea {
    /// Create an idea.
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            slug: slug.into(),
        }
    }

    /// Slug for the blog link, falling back to [`DEFAULT_SLUG`].
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_core::{Idea, DEFAULT_SLUG};
    ///
    /// assert_eq!(Idea::new("t", "s", "vpn-basics").link_tag(), "vpn-basics");
    /// assert_eq!(Idea::new("t", "s", "  ").link_tag(), DEFAULT_SLUG);
    /// ```
    pub fn link_tag(&self) -> &str {
        match self.slug.trim() {
            "" => DEFAULT_SLUG,
            slug => slug,
        }
    }
}
