//! Per-stage shape validation.
//!
//! Each validator turns an untyped [`Payload`] into typed data for one stage.
//! Idea lists are filtered element by element; content and translation objects
//! degrade field by field, leaving absent fields as `None` for the caller to
//! replace with sentinels.

use crate::Payload;
use derive_getters::Getters;
use postcraft_core::Idea;
use postcraft_error::{ShapeError, ShapeErrorKind};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Ideas that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct IdeaBatch {
    /// Valid ideas in model order
    ideas: Vec<Idea>,
    /// Number of elements dropped
    dropped: usize,
}

impl IdeaBatch {
    /// Take the ideas.
    pub fn into_ideas(self) -> Vec<Idea> {
        self.ideas
    }
}

/// Fields recovered from a content-generation object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentFields {
    /// `linkedin_post`, when present
    pub linkedin_post: Option<String>,
    /// `blog_article`, when present
    pub blog_article: Option<String>,
}

/// Fields recovered from a translation object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationFields {
    /// `linkedin_post_fr`, when present
    pub linkedin_post_fr: Option<String>,
    /// `blog_article_fr`, when present
    pub blog_article_fr: Option<String>,
    /// `blog_link_tag_fr`, when present
    pub blog_link_tag_fr: Option<String>,
}

/// Keep list elements that are objects with non-empty string `title`, `summary` and `slug`.
///
/// Invalid elements are dropped and logged.
///
/// # Errors
///
/// - `ShapeErrorKind::ExpectedList` if the payload is not a list
/// - `ShapeErrorKind::EmptyResult` if no element survives
///
/// # Examples
///
/// ```
/// use postcraft_response::{validate_ideas, Payload};
/// use serde_json::json;
///
/// let payload = Payload::from(json!([
///     {"title": "A", "summary": "B", "slug": "c"},
///     {"title": "missing summary", "slug": "d"},
/// ]));
/// let batch = validate_ideas(payload).unwrap();
/// assert_eq!(batch.ideas().len(), 1);
/// assert_eq!(*batch.dropped(), 1);
/// ```
pub fn validate_ideas(payload: Payload) -> Result<IdeaBatch, ShapeError> {
    let items = match payload {
        Payload::List(items) => items,
        other => {
            warn!(shape = other.shape_name(), "Ideas payload is not a list");
            return Err(ShapeError::new(ShapeErrorKind::ExpectedList(
                "ideas".to_string(),
            )));
        }
    };

    let total = items.len();
    let ideas: Vec<Idea> = items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| {
            let idea = idea_from_value(&item);
            if idea.is_none() {
                warn!(position, item = %item, "Skipping an invalid item in ideas list");
            }
            idea
        })
        .collect();

    if ideas.is_empty() {
        return Err(ShapeError::new(ShapeErrorKind::EmptyResult(
            "ideas".to_string(),
        )));
    }

    debug!(valid = ideas.len(), total, "Validated ideas");
    Ok(IdeaBatch {
        dropped: total - ideas.len(),
        ideas,
    })
}

fn idea_from_value(item: &Value) -> Option<Idea> {
    let map = item.as_object()?;
    Some(Idea::new(
        non_empty_string(map, "title")?,
        non_empty_string(map, "summary")?,
        non_empty_string(map, "slug")?,
    ))
}

/// Read `linkedin_post` and `blog_article` from a content object.
///
/// # Errors
///
/// Returns `ShapeErrorKind::ExpectedObject` if the payload is not an object.
pub fn validate_content(payload: Payload) -> Result<ContentFields, ShapeError> {
    let map = expect_object(payload, "content generation")?;
    let fields = ContentFields {
        linkedin_post: non_empty_string(&map, "linkedin_post"),
        blog_article: non_empty_string(&map, "blog_article"),
    };
    if fields.linkedin_post.is_none() || fields.blog_article.is_none() {
        warn!(
            has_post = fields.linkedin_post.is_some(),
            has_article = fields.blog_article.is_some(),
            "Content object is missing fields"
        );
    }
    Ok(fields)
}

/// Read `linkedin_post_fr`, `blog_article_fr` and `blog_link_tag_fr` from a translation object.
///
/// # Errors
///
/// Returns `ShapeErrorKind::ExpectedObject` if the payload is not an object.
pub fn validate_translation(payload: Payload) -> Result<TranslationFields, ShapeError> {
    let map = expect_object(payload, "translation")?;
    Ok(TranslationFields {
        linkedin_post_fr: non_empty_string(&map, "linkedin_post_fr"),
        blog_article_fr: non_empty_string(&map, "blog_article_fr"),
        blog_link_tag_fr: non_empty_string(&map, "blog_link_tag_fr"),
    })
}

fn expect_object(payload: Payload, what: &str) -> Result<Map<String, Value>, ShapeError> {
    match payload {
        Payload::Object(map) => Ok(map),
        other => {
            warn!(shape = other.shape_name(), what, "Payload is not an object");
            Err(ShapeError::new(ShapeErrorKind::ExpectedObject(
                what.to_string(),
            )))
        }
    }
}

/// A string field with surrounding whitespace removed; absent, non-string and blank are `None`.
fn non_empty_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
