//! Wiring of configuration, gateway, store and workflow.

use crate::{CurrentSession, PostcraftConfig};
use postcraft_core::TopicCatalog;
use postcraft_error::PostcraftResult;
use postcraft_interface::{ModelGateway, SessionStore};
use postcraft_models::OpenRouterClient;
use postcraft_storage::FileSystemSessionStore;
use postcraft_workflow::{ContentWorkflow, SessionHandle, WorkflowSettings};
use std::sync::Arc;
use tracing::{debug, instrument};

/// A ready-to-use workflow with its session storage.
pub struct Postcraft {
    workflow: ContentWorkflow,
    store: Arc<dyn SessionStore>,
    current: CurrentSession,
}

impl std::fmt::Debug for Postcraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Postcraft")
            .field("workflow", &self.workflow)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl Postcraft {
    /// Build the OpenRouter gateway and filesystem store described by `config`.
    ///
    /// A missing API key does not fail here; it fails the first stage that
    /// calls the model.
    #[instrument(skip(config))]
    pub fn from_config(config: &PostcraftConfig) -> PostcraftResult<Self> {
        let gateway = OpenRouterClient::new(config.openrouter_config()?)?;
        if !gateway.has_credentials() {
            debug!("No OpenRouter API key configured");
        }

        let session_dir = config.session_dir()?;
        let store = FileSystemSessionStore::new(session_dir.clone())?;

        Self::new(
            Arc::new(gateway),
            Arc::new(store),
            CurrentSession::in_dir(&session_dir),
            config.workflow_settings()?,
        )
    }

    /// Assemble from explicit parts using the bundled topic catalog.
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        store: Arc<dyn SessionStore>,
        current: CurrentSession,
        settings: WorkflowSettings,
    ) -> PostcraftResult<Self> {
        let catalog = TopicCatalog::bundled()?;
        Ok(Self {
            workflow: ContentWorkflow::new(gateway, catalog, settings),
            store,
            current,
        })
    }

    /// The workflow.
    pub fn workflow(&self) -> &ContentWorkflow {
        &self.workflow
    }

    /// The current-session pointer.
    pub fn current(&self) -> &CurrentSession {
        &self.current
    }

    /// Handle for `token`, or for the remembered current session.
    ///
    /// A current session is created on first use.
    pub fn session(&self, token: Option<&str>) -> PostcraftResult<SessionHandle> {
        let token = match token {
            Some(token) => token.to_string(),
            None => self.current.read_or_create()?,
        };
        SessionHandle::new(Arc::clone(&self.store), token)
    }

    /// Start a new session and make it current.
    pub fn new_session(&self) -> PostcraftResult<SessionHandle> {
        let token = crate::new_session_token();
        self.current.write(&token)?;
        SessionHandle::new(Arc::clone(&self.store), token)
    }
}
