//! Session state machine for the Postcraft content workflow.
//!
//! A session moves through these stages:
//!
//! ```text
//! Fresh → TopicSelected → IdeasGenerated → IdeaSelected → ContentGenerated → (Translated)
//! ```
//!
//! [`ContentWorkflow`] exposes one guarded operation per transition. Each
//! operation works on an explicit [`SessionHandle`], so nothing is shared between
//! sessions.
//!
//! # Example
//!
//! ```no_run
//! use postcraft_workflow::{ContentWorkflow, SessionHandle, WorkflowSettings};
//! # async fn run(
//! #     gateway: std::sync::Arc<dyn postcraft_interface::ModelGateway>,
//! #     store: std::sync::Arc<dyn postcraft_interface::SessionStore>,
//! # ) -> postcraft_error::PostcraftResult<()> {
//! let catalog = postcraft_core::TopicCatalog::bundled()?;
//! let workflow = ContentWorkflow::new(gateway, catalog, WorkflowSettings::default());
//! let session = SessionHandle::new(store, "3f2b9c1e")?;
//!
//! workflow.select_topic(&session, "VPN Explained Simply").await?;
//! let ideas = workflow.generate_ideas(&session).await?;
//! workflow.select_idea(&session, 0).await?;
//! let content = workflow.generate_content(&session).await?;
//! # let _ = (ideas, content);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod key;
mod links;
mod prompts;
mod report;
mod settings;
mod stage;
mod state;
mod workflow;

pub use key::SessionKey;
pub use links::{append_read_more, localize_post_link};
pub use prompts::{content_prompt, ideas_prompt, translation_prompt};
pub use report::{Notice, NoticeLevel, StageReport};
pub use settings::{
    DEFAULT_BLOG_DOMAIN, DEFAULT_GENERATION_MODEL, DEFAULT_TRANSLATION_MODEL, WorkflowSettings,
    WorkflowSettingsBuilder,
};
pub use stage::Stage;
pub use state::{SessionHandle, SessionState};
pub use workflow::ContentWorkflow;
