//! Expected top-level JSON structure of a model response.

use serde::{Deserialize, Serialize};

/// The JSON container a stage expects the model to return.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum StructureKind {
    /// A JSON array, delimited by `[` and `]`
    #[display("list")]
    List,
    /// A JSON object, delimited by `{` and `}`
    #[display("object")]
    Object,
}

impl StructureKind {
    /// Opening bracket.
    pub fn open(self) -> char {
        match self {
            Self::List => '[',
            Self::Object => '{',
        }
    }

    /// Closing bracket.
    pub fn close(self) -> char {
        match self {
            Self::List => ']',
            Self::Object => '}',
        }
    }
}
