//! Output bundles of the content and translation stages.

use crate::{GeneratedText, Sentinel};
use serde::{Deserialize, Serialize};

/// Build the canonical blog URL `https://{domain}/{link_tag}`.
///
/// # Examples
///
/// ```
/// use postcraft_core::canonical_url;
///
/// assert_eq!(
///     canonical_url("myblogname.com", "vpn-basics"),
///     "https://myblogname.com/vpn-basics"
/// );
/// ```
pub fn canonical_url(domain: &str, link_tag: &str) -> String {
    format!("https://{}/{}", domain, link_tag)
}

/// English content produced for the selected idea.
///
/// `full_blog_url` is always derived from the domain and `blog_link_tag`, never
/// taken from model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBundle {
    /// LinkedIn post text
    pub linkedin_post: GeneratedText,
    /// Markdown blog article
    pub blog_article: GeneratedText,
    /// Blog slug
    pub blog_link_tag: String,
    /// `https://{domain}/{blog_link_tag}`
    pub full_blog_url: String,
    /// Title of the idea this content was generated for
    pub idea_title: String,
    /// Title of the topic the idea belongs to
    pub topic_title: String,
}

impl ContentBundle {
    /// A bundle with both text fields failed, ready to be filled in.
    pub fn degraded(
        domain: &str,
        blog_link_tag: impl Into<String>,
        idea_title: impl Into<String>,
        topic_title: impl Into<String>,
    ) -> Self {
        let blog_link_tag = blog_link_tag.into();
        Self {
            linkedin_post: GeneratedText::failed(Sentinel::EnglishPost),
            blog_article: GeneratedText::failed(Sentinel::EnglishArticle),
            full_blog_url: canonical_url(domain, &blog_link_tag),
            blog_link_tag,
            idea_title: idea_title.into(),
            topic_title: topic_title.into(),
        }
    }

    /// Whether the post and article are real content that may be translated.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_core::{ContentBundle, GeneratedText};
    ///
    /// let mut bundle = ContentBundle::degraded("example.com", "slug", "Idea", "Topic");
    /// assert!(!bundle.is_translatable());
    ///
    /// bundle.linkedin_post = GeneratedText::generated("Post");
    /// bundle.blog_article = GeneratedText::generated("# Article");
    /// assert!(bundle.is_translatable());
    /// ```
    pub fn is_translatable(&self) -> bool {
        !self.linkedin_post.is_failed_or(Sentinel::EnglishPost)
            && !self.blog_article.is_failed_or(Sentinel::EnglishArticle)
            && !self.linkedin_post.as_str().is_empty()
            && !self.blog_article.as_str().is_empty()
            && !self.blog_link_tag.is_empty()
    }
}

/// French translation of a [`ContentBundle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationBundle {
    /// Translated LinkedIn post
    pub linkedin_post_fr: GeneratedText,
    /// Translated Markdown article
    pub blog_article_fr: GeneratedText,
    /// French slug
    pub blog_link_tag_fr: String,
    /// `https://{domain}/{blog_link_tag_fr}`
    pub full_blog_url_fr: String,
}

impl TranslationBundle {
    /// Slug used when the model supplies no French slug.
    pub const DEFAULT_SLUG: &'static str = "erreur-slug";

    /// A bundle with every field at its default, ready to be filled in.
    pub fn degraded(domain: &str) -> Self {
        Self {
            linkedin_post_fr: GeneratedText::failed(Sentinel::FrenchPost),
            blog_article_fr: GeneratedText::failed(Sentinel::FrenchArticle),
            blog_link_tag_fr: Self::DEFAULT_SLUG.to_string(),
            full_blog_url_fr: canonical_url(domain, Self::DEFAULT_SLUG),
        }
    }
}
