//! Resilient parsing of language-model output.
//!
//! Model responses often wrap JSON in markdown fences or surround it with
//! commentary, and sometimes emit literal newlines inside string values.
//! Parsing runs in three steps:
//!
//! 1. [`extract`] locates the JSON list or object in the raw text
//! 2. [`decode`] parses it strictly, then retries leniently
//! 3. the shape validators turn the untyped [`Payload`] into typed stage data
//!
//! [`parse_response`] runs steps 1 and 2 together.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decode;
mod extraction;
mod payload;
mod shape;

pub use decode::{DecodeMode, Decoded, decode, relax_control_characters};
pub use extraction::extract;
pub use payload::{ParsedResponse, Payload, parse_response};
pub use shape::{
    ContentFields, IdeaBatch, TranslationFields, validate_content, validate_ideas,
    validate_translation,
};
