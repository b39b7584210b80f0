//! Guarded stage transitions.
//!
//! Each operation loads the session, checks its precondition, runs at most one
//! model call through the parsing pipeline, and saves the resulting state.

use crate::{
    Notice, SessionHandle, SessionState, StageReport, WorkflowSettings, append_read_more,
    content_prompt, ideas_prompt, localize_post_link, translation_prompt,
};
use postcraft_core::{
    ChatMessage, ContentBundle, GeneratedText, Idea, StructureKind, Topic, TopicCatalog,
    TranslationBundle, canonical_url,
};
use postcraft_error::{
    PostcraftError, PostcraftErrorKind, PostcraftResult, SessionError, SessionErrorKind,
    ShapeError,
};
use postcraft_interface::ModelGateway;
use postcraft_response::{
    Payload, parse_response, validate_content, validate_ideas, validate_translation,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Articles shorter than this are checked for note-like content.
const SHORT_ARTICLE_CHARS: usize = 200;
const NOTE_MARKERS: [&str; 3] = ["note:", "summary.", "truncated"];

/// The topic → ideas → content → translation pipeline.
pub struct ContentWorkflow {
    gateway: Arc<dyn ModelGateway>,
    catalog: TopicCatalog,
    settings: WorkflowSettings,
}

impl std::fmt::Debug for ContentWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentWorkflow")
            .field("provider", &self.gateway.provider_name())
            .field("topics", &self.catalog.topics().len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl ContentWorkflow {
    /// Create a workflow over a gateway, a topic catalog and settings.
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        catalog: TopicCatalog,
        settings: WorkflowSettings,
    ) -> Self {
        Self {
            gateway,
            catalog,
            settings,
        }
    }

    /// The topic catalog.
    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    /// The workflow settings.
    pub fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }

    /// Select a topic, clearing everything derived from a previous one.
    ///
    /// # Errors
    ///
    /// Returns `SessionErrorKind::TopicNotFound` if `title` is not in the catalog.
    #[instrument(skip(self, session))]
    pub async fn select_topic(
        &self,
        session: &SessionHandle,
        title: &str,
    ) -> PostcraftResult<Topic> {
        let topic = self.catalog.find(title).cloned().ok_or_else(|| {
            SessionError::new(SessionErrorKind::TopicNotFound(title.to_string()))
        })?;

        let mut state = session.load().await?;
        state.select_topic(topic.clone());
        session.save(&state).await?;
        info!(topic = %topic.title, "Topic selected");
        Ok(topic)
    }

    /// Ask the model for post ideas about the selected topic.
    ///
    /// On any failure after the call is attempted, stale ideas are cleared.
    ///
    /// # Errors
    ///
    /// - `SessionErrorKind::StageNotReached` without a selected topic
    /// - configuration errors, before any call and without touching state
    /// - gateway, extract, decode and shape errors
    #[instrument(skip(self, session))]
    pub async fn generate_ideas(
        &self,
        session: &SessionHandle,
    ) -> PostcraftResult<StageReport<Vec<Idea>>> {
        let mut state = session.load().await?;
        let topic = state.current_topic.clone().ok_or_else(|| {
            SessionError::new(SessionErrorKind::StageNotReached {
                operation: "generate ideas".to_string(),
                required: "selecting a topic".to_string(),
            })
        })?;

        let mut notices = Vec::new();
        let outcome = self
            .request(
                "ideas",
                ideas_prompt(&topic),
                self.settings.generation_model(),
                StructureKind::List,
                validate_ideas,
                &mut notices,
            )
            .await;

        let batch = match outcome {
            Ok(batch) => batch,
            Err(e) if e.is_config() => return Err(e),
            Err(e) => {
                state.clear_ideas();
                session.save(&state).await?;
                return Err(e);
            }
        };

        if *batch.dropped() > 0 {
            notices.push(Notice::warning(format!(
                "Skipped {} invalid item(s) in the AI response for ideas.",
                batch.dropped()
            )));
        }

        let ideas = batch.into_ideas();
        state.store_ideas(ideas.clone());
        session.save(&state).await?;
        info!(topic = %topic.title, count = ideas.len(), "Ideas generated");
        Ok(StageReport::new(ideas, notices))
    }

    /// Select one of the generated ideas by position.
    ///
    /// # Errors
    ///
    /// - `SessionErrorKind::StageNotReached` when no ideas are stored
    /// - `SessionErrorKind::IndexOutOfRange` when `index` is out of bounds; the
    ///   previous selection is kept
    #[instrument(skip(self, session))]
    pub async fn select_idea(
        &self,
        session: &SessionHandle,
        index: usize,
    ) -> PostcraftResult<Idea> {
        let mut state = session.load().await?;
        let idea = state.select_idea(index)?.clone();
        session.save(&state).await?;
        info!(index, title = %idea.title, "Idea selected");
        Ok(idea)
    }

    /// Ask the model for the LinkedIn post and blog article of the selected idea.
    ///
    /// This stage degrades instead of failing: fields the model did not supply
    /// carry their failure sentinel, and the problem is reported as an error
    /// notice. A bundle is stored in every case and any translation is dropped.
    ///
    /// # Errors
    ///
    /// - `SessionErrorKind::StageNotReached` without a selected idea
    /// - configuration errors, before any call and without touching state
    /// - storage errors
    #[instrument(skip(self, session))]
    pub async fn generate_content(
        &self,
        session: &SessionHandle,
    ) -> PostcraftResult<StageReport<ContentBundle>> {
        let mut state = session.load().await?;
        let (topic, idea) = match (&state.current_topic, &state.current_selected_idea) {
            (Some(topic), Some(idea)) => (topic.clone(), idea.clone()),
            _ => {
                return Err(SessionError::new(SessionErrorKind::StageNotReached {
                    operation: "generate content".to_string(),
                    required: "selecting an idea".to_string(),
                })
                .into());
            }
        };

        let mut bundle = ContentBundle::degraded(
            self.settings.blog_domain(),
            idea.link_tag(),
            &idea.title,
            &topic.title,
        );
        let mut notices = Vec::new();

        let outcome = self
            .request(
                "content generation",
                content_prompt(&idea, &bundle.full_blog_url, &bundle.blog_link_tag),
                self.settings.generation_model(),
                StructureKind::Object,
                validate_content,
                &mut notices,
            )
            .await;

        match outcome {
            Ok(fields) => {
                let mut missing = Vec::new();
                match fields.linkedin_post {
                    Some(post) => bundle.linkedin_post = GeneratedText::generated(post),
                    None => missing.push("linkedin_post"),
                }
                match fields.blog_article {
                    Some(article) => bundle.blog_article = GeneratedText::generated(article),
                    None => missing.push("blog_article"),
                }
                if !missing.is_empty() {
                    notices.push(Notice::error(format!(
                        "AI response for content generation did not include: {}.",
                        missing.join(", ")
                    )));
                }
            }
            Err(e) if e.is_config() => return Err(e),
            Err(e) => notices.push(Notice::error(failure_notice("content generation", &e))),
        }

        if let Some(article) = bundle.blog_article.text().filter(|a| looks_like_note(a)) {
            let preview: String = article.chars().take(150).collect();
            warn!(
                preview = %preview,
                "Generated blog article looks like a short note rather than a full article"
            );
        }

        append_read_more(&mut bundle.linkedin_post, &bundle.full_blog_url);

        state.store_content(bundle.clone());
        session.save(&state).await?;
        info!(
            slug = %bundle.blog_link_tag,
            degraded = !bundle.is_translatable(),
            "Content generated"
        );
        Ok(StageReport::new(bundle, notices))
    }

    /// Ask the translation model for a French version of the stored content.
    ///
    /// Missing fields fall back to their sentinels and the default French slug.
    /// Translation can be repeated; each success replaces the previous one.
    ///
    /// # Errors
    ///
    /// - `SessionErrorKind::InvalidPriorContent` when no valid English content is stored
    /// - gateway, extract, decode and shape errors, leaving state unchanged
    #[instrument(skip(self, session))]
    pub async fn translate_content(
        &self,
        session: &SessionHandle,
    ) -> PostcraftResult<StageReport<TranslationBundle>> {
        let mut state = session.load().await?;
        let content = state.translatable_content()?.clone();

        let mut notices = Vec::new();
        let fields = self
            .request(
                "translation",
                translation_prompt(&content),
                self.settings.translation_model(),
                StructureKind::Object,
                validate_translation,
                &mut notices,
            )
            .await?;

        let domain = self.settings.blog_domain();
        let mut bundle = TranslationBundle::degraded(domain);
        let mut missing = Vec::new();
        match fields.linkedin_post_fr {
            Some(post) => bundle.linkedin_post_fr = GeneratedText::generated(post),
            None => missing.push("linkedin_post_fr"),
        }
        match fields.blog_article_fr {
            Some(article) => bundle.blog_article_fr = GeneratedText::generated(article),
            None => missing.push("blog_article_fr"),
        }
        match fields.blog_link_tag_fr {
            Some(tag) => bundle.blog_link_tag_fr = tag,
            None => missing.push("blog_link_tag_fr"),
        }
        bundle.full_blog_url_fr = canonical_url(domain, &bundle.blog_link_tag_fr);
        if !missing.is_empty() {
            notices.push(Notice::error(format!(
                "AI response for translation did not include: {}.",
                missing.join(", ")
            )));
        }

        localize_post_link(
            &mut bundle.linkedin_post_fr,
            &content.full_blog_url,
            &bundle.full_blog_url_fr,
        );

        state.store_translation(bundle.clone())?;
        session.save(&state).await?;
        info!(slug = %bundle.blog_link_tag_fr, "Content translated");
        Ok(StageReport::new(bundle, notices))
    }

    /// Return to the start: clear stored content and translation.
    ///
    /// # Errors
    ///
    /// Returns storage errors.
    #[instrument(skip(self, session))]
    pub async fn reset(&self, session: &SessionHandle) -> PostcraftResult<()> {
        let mut state = session.load().await?;
        state.reset();
        session.save(&state).await
    }

    /// Snapshot of the session.
    ///
    /// # Errors
    ///
    /// Returns storage errors.
    pub async fn show(&self, session: &SessionHandle) -> PostcraftResult<SessionState> {
        session.load().await
    }

    /// One gateway call followed by extraction, decoding and `validate`.
    ///
    /// A lenient decode adds a warning to `notices`. Parse and shape failures
    /// log the full raw text and carry a snippet of it.
    async fn request<T>(
        &self,
        label: &str,
        messages: Vec<ChatMessage>,
        model: &str,
        expected: StructureKind,
        validate: impl FnOnce(Payload) -> Result<T, ShapeError>,
        notices: &mut Vec<Notice>,
    ) -> PostcraftResult<T> {
        debug!(
            stage = label,
            model,
            provider = self.gateway.provider_name(),
            "Invoking model gateway"
        );
        let raw = self.gateway.invoke(&messages, model).await.map_err(|e| {
            error!(stage = label, model, error = %e, "Model gateway call failed");
            PostcraftError::from(e)
        })?;

        let parsed = parse_response(&raw, expected).inspect_err(|e| {
            error!(stage = label, error = %e, raw = %raw, "Could not parse model response");
        })?;

        if parsed.lenient {
            notices.push(Notice::warning(format!(
                "AI response for {} contained non-standard characters. Parsed leniently.",
                label
            )));
        }

        validate(parsed.payload).map_err(|e| {
            error!(stage = label, error = %e, raw = %raw, "Model response has the wrong shape");
            e.with_snippet(&raw).into()
        })
    }
}

/// Single-line error notice for a failed call or unparseable response.
fn failure_notice(label: &str, err: &PostcraftError) -> String {
    match err.kind() {
        PostcraftErrorKind::Gateway(_) => format!(
            "Failed to receive a valid response from the AI for {}. {}",
            label,
            err.user_message()
        ),
        _ => format!(
            "Error processing AI response for {}: {}",
            label,
            err.user_message()
        ),
    }
}

/// Whether a generated article is short and reads like a note or summary.
fn looks_like_note(article: &str) -> bool {
    if article.chars().count() >= SHORT_ARTICLE_CHARS {
        return false;
    }
    let lower = article.to_lowercase();
    NOTE_MARKERS.iter().any(|marker| lower.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_note() {
        assert!(looks_like_note("Note: the full article was truncated."));
        assert!(looks_like_note("This is a SUMMARY. More later."));
        assert!(!looks_like_note("# VPNs\n\nA short but real article."));

        let long = format!("Note: {}", "x".repeat(300));
        assert!(!looks_like_note(&long));
    }

    #[test]
    fn test_failure_notice_prefixes() {
        let gateway: PostcraftError = postcraft_error::GatewayError::new(
            postcraft_error::GatewayErrorKind::MalformedEnvelope("no choices".to_string()),
        )
        .into();
        assert!(
            failure_notice("content generation", &gateway)
                .starts_with("Failed to receive a valid response from the AI for content generation.")
        );

        let shape: PostcraftError = postcraft_error::ShapeError::new(
            postcraft_error::ShapeErrorKind::ExpectedObject("content generation".to_string()),
        )
        .into();
        assert_eq!(
            failure_notice("content generation", &shape),
            "Error processing AI response for content generation: Parsed data for content generation is not an object as expected"
        );
    }
}
