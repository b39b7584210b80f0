//! Session storage backends for Postcraft.
//!
//! Both backends implement [`SessionStore`](postcraft_interface::SessionStore):
//!
//! - [`InMemorySessionStore`]: process-local, for tests and one-shot runs
//! - [`FileSystemSessionStore`]: one JSON record per session token, so a
//!   session survives between CLI invocations

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;
mod record;

pub use filesystem::FileSystemSessionStore;
pub use memory::InMemorySessionStore;
pub use record::SessionRecord;
