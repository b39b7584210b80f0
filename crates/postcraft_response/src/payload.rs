//! Tagged representation of decoded model output.

use crate::{decode, extract};
use postcraft_core::StructureKind;
use postcraft_error::PostcraftResult;
use serde_json::{Map, Value};
use tracing::instrument;

/// Untyped JSON from the model, tagged by top-level shape.
///
/// This never leaves the parsing layer: the shape validators convert it into
/// typed stage data immediately.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Top-level array
    List(Vec<Value>),
    /// Top-level object
    Object(Map<String, Value>),
    /// Any other JSON value
    Invalid(Value),
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(items),
            Value::Object(map) => Self::Object(map),
            other => Self::Invalid(other),
        }
    }
}

impl Payload {
    /// Name of the top-level shape, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::Invalid(Value::Null) => "null",
            Self::Invalid(Value::Bool(_)) => "boolean",
            Self::Invalid(Value::Number(_)) => "number",
            Self::Invalid(Value::String(_)) => "string",
            Self::Invalid(_) => "value",
        }
    }
}

/// Output of [`parse_response`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    /// The decoded payload
    pub payload: Payload,
    /// Whether decoding needed the relaxed retry
    pub lenient: bool,
}

/// Extract and decode raw model text in one step.
///
/// # Errors
///
/// Returns an extract error when no structure of the expected kind is found,
/// or a decode error (with a raw-text snippet) when the payload is not JSON.
///
/// # Examples
///
/// ```
/// use postcraft_core::StructureKind;
/// use postcraft_response::{parse_response, Payload};
///
/// let parsed = parse_response("```json\n[1, 2]\n```", StructureKind::List).unwrap();
/// assert!(!parsed.lenient);
/// assert!(matches!(parsed.payload, Payload::List(ref items) if items.len() == 2));
/// ```
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_response(raw: &str, expected: StructureKind) -> PostcraftResult<ParsedResponse> {
    let json = extract(raw, expected)?;
    let decoded = decode(json).map_err(|e| e.with_snippet(raw))?;
    Ok(ParsedResponse {
        lenient: decoded.is_lenient(),
        payload: decoded.value.into(),
    })
}
