//! Postcraft - topic to LinkedIn post, blog article and French translation
//!
//! Postcraft walks a user through a five-step pipeline: pick a topic, generate
//! post ideas, pick an idea, generate an English LinkedIn post and blog article,
//! and translate both to French. Every step is one call to a chat-completion
//! model whose free-form answer is extracted, leniently decoded and validated
//! before it is stored in the user's session.
//!
//! # Quick Start
//!
//! ```no_run
//! use postcraft::{Postcraft, PostcraftConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> postcraft::PostcraftResult<()> {
//! let config = PostcraftConfig::load()?;
//! let app = Postcraft::from_config(&config)?;
//! let session = app.session(None)?;
//!
//! app.workflow().select_topic(&session, "VPN Explained Simply").await?;
//! let report = app.workflow().generate_ideas(&session).await?;
//! for notice in report.notices() {
//!     eprintln!("{}", notice);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Postcraft is organized as a workspace with focused crates:
//!
//! - `postcraft_error` - Error types
//! - `postcraft_core` - Topics, ideas, content bundles, chat messages
//! - `postcraft_interface` - `ModelGateway` and `SessionStore` traits
//! - `postcraft_models` - OpenRouter gateway
//! - `postcraft_response` - Extraction, lenient decoding, shape validation
//! - `postcraft_storage` - In-memory and filesystem session stores
//! - `postcraft_workflow` - Session state machine
//!
//! This crate (`postcraft`) re-exports everything for convenience and adds
//! configuration, logging setup and the `postcraft` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod config;
mod current;
mod observability;
pub mod render;

pub use app::Postcraft;
pub use config::{
    API_KEY_VAR, BLOG_DOMAIN_VAR, EnvOverrides, GENERATION_MODEL_VAR, GatewaySection,
    LoggingSection, PostcraftConfig, SESSION_DIR_VAR, StorageSection, TRANSLATION_MODEL_VAR,
    WorkflowSection,
};
pub use current::{CURRENT_SESSION_FILE, CurrentSession, new_session_token};
pub use observability::{ObservabilityConfig, init_observability};

// Re-export workspace crates
pub use postcraft_core::*;
pub use postcraft_error::*;
pub use postcraft_interface::*;
pub use postcraft_models::*;
pub use postcraft_response::*;
pub use postcraft_storage::*;
pub use postcraft_workflow::*;
