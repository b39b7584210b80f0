//! Trait definitions for the Postcraft content workflow.
//!
//! The workflow talks to two external collaborators through these seams:
//! - [`ModelGateway`]: messages in, raw model text or a typed failure out
//! - [`SessionStore`]: an opaque key-value store scoped by session token

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ModelGateway, SessionStore, validate_token};
