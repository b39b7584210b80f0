//! Core data types for the Postcraft content workflow.
//!
//! This crate provides the data model shared by every stage of the pipeline:
//! the topic catalog, model-produced ideas, the English and French bundles,
//! and the chat messages sent to the model gateway.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bundle;
mod catalog;
mod generated;
mod idea;
mod message;
mod role;
mod structure;

pub use bundle::{ContentBundle, TranslationBundle, canonical_url};
pub use catalog::{Topic, TopicCatalog};
pub use generated::{GeneratedText, Sentinel};
pub use idea::{DEFAULT_SLUG, Idea};
pub use message::{ChatMessage, ChatMessageBuilder};
pub use role::Role;
pub use structure::StructureKind;
