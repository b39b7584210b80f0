//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Chat role sent to the model gateway.
///
/// # Examples
///
/// ```
/// use postcraft_core::Role;
///
/// assert_eq!(Role::System.to_string(), "system");
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages carry the actual request
    User,
    /// Assistant messages are from the model
    Assistant,
}
