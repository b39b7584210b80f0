//! Per-session workflow state and its persistence.
//!
//! [`SessionState`] holds the typed values of one session and enforces the
//! transition rules on them. [`SessionHandle`] binds a token to a
//! [`SessionStore`] and moves state in and out of it.

use crate::{SessionKey, Stage};
use postcraft_core::{ContentBundle, Idea, Topic, TranslationBundle};
use postcraft_error::{
    JsonError, PostcraftResult, SessionError, SessionErrorKind, StorageError, StorageErrorKind,
};
use postcraft_interface::{SessionStore, validate_token};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Typed values stored for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Selected topic
    pub current_topic: Option<Topic>,
    /// Ideas from the last successful generation
    pub generated_ideas: Vec<Idea>,
    /// Idea chosen from `generated_ideas`
    pub current_selected_idea: Option<Idea>,
    /// English content
    pub last_generated_content: Option<ContentBundle>,
    /// French translation of `last_generated_content`
    pub translated_content: Option<TranslationBundle>,
}

impl SessionState {
    /// Current pipeline position.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_workflow::{SessionState, Stage};
    ///
    /// assert_eq!(SessionState::default().stage(), Stage::Fresh);
    /// ```
    pub fn stage(&self) -> Stage {
        if self.translated_content.is_some() {
            Stage::Translated
        } else if self.last_generated_content.is_some() {
            Stage::ContentGenerated
        } else if self.current_selected_idea.is_some() {
            Stage::IdeaSelected
        } else if !self.generated_ideas.is_empty() {
            Stage::IdeasGenerated
        } else if self.current_topic.is_some() {
            Stage::TopicSelected
        } else {
            Stage::Fresh
        }
    }

    /// Store a new topic and clear everything derived from the previous one.
    pub fn select_topic(&mut self, topic: Topic) {
        debug!(topic = %topic.title, "Selecting topic");
        *self = Self {
            current_topic: Some(topic),
            ..Self::default()
        };
    }

    /// Replace the ideas list, clearing the selection and its content.
    pub fn store_ideas(&mut self, ideas: Vec<Idea>) {
        debug!(count = ideas.len(), "Storing ideas");
        self.generated_ideas = ideas;
        self.clear_selection();
    }

    /// Drop stale ideas after a failed generation.
    pub fn clear_ideas(&mut self) {
        debug!("Clearing ideas");
        self.generated_ideas.clear();
        self.clear_selection();
    }

    fn clear_selection(&mut self) {
        self.current_selected_idea = None;
        self.last_generated_content = None;
        self.translated_content = None;
    }

    /// Select an idea by position.
    ///
    /// Content and translation for a previous selection are cleared.
    ///
    /// # Errors
    ///
    /// - `SessionErrorKind::StageNotReached` if no ideas are stored
    /// - `SessionErrorKind::IndexOutOfRange` if `index` is not in `[0, len)`; state is unchanged
    pub fn select_idea(&mut self, index: usize) -> Result<&Idea, SessionError> {
        if self.current_topic.is_none() || self.generated_ideas.is_empty() {
            return Err(SessionError::new(SessionErrorKind::StageNotReached {
                operation: "select an idea".to_string(),
                required: "generating ideas".to_string(),
            }));
        }
        let idea = self
            .generated_ideas
            .get(index)
            .cloned()
            .ok_or_else(|| {
                SessionError::new(SessionErrorKind::IndexOutOfRange {
                    index,
                    len: self.generated_ideas.len(),
                })
            })?;

        debug!(index, title = %idea.title, "Selecting idea");
        self.last_generated_content = None;
        self.translated_content = None;
        let selected: &Idea = self.current_selected_idea.insert(idea);
        Ok(selected)
    }

    /// Store English content, discarding any earlier translation.
    pub fn store_content(&mut self, bundle: ContentBundle) {
        debug!(slug = %bundle.blog_link_tag, "Storing content");
        self.last_generated_content = Some(bundle);
        self.translated_content = None;
    }

    /// The stored English content, if it is real content that may be translated.
    ///
    /// # Errors
    ///
    /// Returns `SessionErrorKind::InvalidPriorContent` if content is missing or failed.
    pub fn translatable_content(&self) -> Result<&ContentBundle, SessionError> {
        self.last_generated_content
            .as_ref()
            .filter(|bundle| bundle.is_translatable())
            .ok_or_else(|| SessionError::new(SessionErrorKind::InvalidPriorContent))
    }

    /// Attach a translation to the stored content.
    ///
    /// # Errors
    ///
    /// Returns `SessionErrorKind::InvalidPriorContent` if there is no translatable content.
    pub fn store_translation(&mut self, bundle: TranslationBundle) -> Result<(), SessionError> {
        self.translatable_content()?;
        debug!(slug = %bundle.blog_link_tag_fr, "Storing translation");
        self.translated_content = Some(bundle);
        Ok(())
    }

    /// Return to the start page: clear content and translation.
    pub fn reset(&mut self) {
        debug!("Resetting generated content");
        self.last_generated_content = None;
        self.translated_content = None;
    }
}

/// A session token bound to its store.
///
/// Every workflow operation receives one of these; there is no process-wide session.
#[derive(Clone)]
pub struct SessionHandle {
    store: Arc<dyn SessionStore>,
    token: String,
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl SessionHandle {
    /// Bind `token` to `store`.
    ///
    /// # Errors
    ///
    /// Returns `StorageErrorKind::InvalidToken` if the token is blank or has control characters.
    pub fn new(store: Arc<dyn SessionStore>, token: impl Into<String>) -> PostcraftResult<Self> {
        let token = token.into();
        validate_token(&token)?;
        Ok(Self { store, token })
    }

    /// The session token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Read every workflow key into a [`SessionState`].
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store fails or a stored value has the wrong shape.
    #[instrument(skip(self))]
    pub async fn load(&self) -> PostcraftResult<SessionState> {
        let state = SessionState {
            current_topic: self.read(SessionKey::CurrentTopic).await?,
            generated_ideas: self
                .read(SessionKey::GeneratedIdeas)
                .await?
                .unwrap_or_default(),
            current_selected_idea: self.read(SessionKey::CurrentSelectedIdea).await?,
            last_generated_content: self.read(SessionKey::LastGeneratedContent).await?,
            translated_content: self.read(SessionKey::TranslatedContent).await?,
        };
        debug!(stage = %state.stage(), "Loaded session state");
        Ok(state)
    }

    /// Write `state` back, deleting keys whose value is absent.
    ///
    /// Every value is serialized before the store is touched. Deletes run first,
    /// from the most derived key to the topic, then sets run from the topic
    /// down. A store failure part way through therefore never leaves a derived
    /// value next to a replaced upstream value.
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error.
    #[instrument(skip(self, state), fields(stage = %state.stage()))]
    pub async fn save(&self, state: &SessionState) -> PostcraftResult<()> {
        let ideas = Some(&state.generated_ideas).filter(|ideas| !ideas.is_empty());
        let entries = [
            (
                SessionKey::CurrentTopic,
                encode(SessionKey::CurrentTopic, state.current_topic.as_ref())?,
            ),
            (
                SessionKey::GeneratedIdeas,
                encode(SessionKey::GeneratedIdeas, ideas)?,
            ),
            (
                SessionKey::CurrentSelectedIdea,
                encode(
                    SessionKey::CurrentSelectedIdea,
                    state.current_selected_idea.as_ref(),
                )?,
            ),
            (
                SessionKey::LastGeneratedContent,
                encode(
                    SessionKey::LastGeneratedContent,
                    state.last_generated_content.as_ref(),
                )?,
            ),
            (
                SessionKey::TranslatedContent,
                encode(
                    SessionKey::TranslatedContent,
                    state.translated_content.as_ref(),
                )?,
            ),
        ];

        for (key, _) in entries.iter().rev().filter(|(_, value)| value.is_none()) {
            self.store.delete(&self.token, key.as_ref()).await?;
        }
        for (key, value) in entries {
            if let Some(value) = value {
                self.store.set(&self.token, key.as_ref(), value).await?;
            }
        }
        debug!("Saved session state");
        Ok(())
    }

    async fn read<T: DeserializeOwned>(&self, key: SessionKey) -> PostcraftResult<Option<T>> {
        let Some(value) = self.store.get(&self.token, key.as_ref()).await? else {
            return Ok(None);
        };
        serde_json::from_value(value).map(Some).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!("{}: {}", key, e))).into()
        })
    }
}

fn encode<T: Serialize>(key: SessionKey, value: Option<&T>) -> PostcraftResult<Option<Value>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = serde_json::to_value(value)
        .map_err(|e| JsonError::new(format!("Failed to serialize {}: {}", key, e)))?;
    Ok(Some(value))
}
