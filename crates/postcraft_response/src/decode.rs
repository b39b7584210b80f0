//! Strict-then-lenient JSON decoding.

use postcraft_error::DecodeError;
use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Which parse attempt produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeMode {
    /// Standard JSON parse succeeded
    Strict,
    /// Strict parse failed; the relaxed retry succeeded
    Relaxed,
}

/// A decoded value and how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The parsed value
    pub value: Value,
    /// Parse attempt that succeeded
    pub mode: DecodeMode,
}

impl Decoded {
    /// Whether the value needed the relaxed retry, which callers must report as a warning.
    pub fn is_lenient(&self) -> bool {
        self.mode == DecodeMode::Relaxed
    }
}

/// Parse JSON, retrying once in relaxed mode.
///
/// Relaxed mode accepts raw control characters inside string values, the usual
/// result of a model writing real newlines instead of `\n`.
///
/// # Errors
///
/// Returns the strict-mode diagnostic when both attempts fail.
///
/// # Examples
///
/// ```
/// use postcraft_response::{decode, DecodeMode};
///
/// let strict = decode(r#"{"post": "one\ntwo"}"#).unwrap();
/// assert_eq!(strict.mode, DecodeMode::Strict);
///
/// let relaxed = decode("{\"post\": \"one\ntwo\"}").unwrap();
/// assert_eq!(relaxed.mode, DecodeMode::Relaxed);
/// assert_eq!(relaxed.value["post"], "one\ntwo");
/// ```
pub fn decode(payload: &str) -> Result<Decoded, DecodeError> {
    let strict_err = match serde_json::from_str::<Value>(payload) {
        Ok(value) => {
            return Ok(Decoded {
                value,
                mode: DecodeMode::Strict,
            });
        }
        Err(e) => e,
    };

    let preview: String = payload.chars().take(200).collect();
    debug!(
        error = %strict_err,
        payload_preview = %preview,
        "Strict JSON parsing failed, retrying in relaxed mode"
    );

    let relaxed = relax_control_characters(payload);
    if let Cow::Owned(relaxed) = &relaxed {
        match serde_json::from_str::<Value>(relaxed) {
            Ok(value) => {
                warn!("Model output contained raw control characters; parsed leniently");
                return Ok(Decoded {
                    value,
                    mode: DecodeMode::Relaxed,
                });
            }
            Err(e) => {
                warn!(error = %e, "Relaxed JSON parsing also failed");
            }
        }
    }

    Err(DecodeError::new(
        strict_err.to_string(),
        strict_err.line(),
        strict_err.column(),
    ))
}

/// Escape raw control characters that appear inside JSON string literals.
///
/// Characters outside strings are left alone, so structural whitespace is
/// unaffected. Returns the input unchanged (borrowed) when nothing needed escaping.
///
/// # Examples
///
/// ```
/// use postcraft_response::relax_control_characters;
///
/// assert_eq!(relax_control_characters("[\n\"a\tb\"\n]"), "[\n\"a\\tb\"\n]");
/// assert_eq!(relax_control_characters("[1, 2]"), "[1, 2]");
/// ```
pub fn relax_control_characters(payload: &str) -> Cow<'_, str> {
    let needs_work = {
        let mut in_string = false;
        let mut escape_next = false;
        let mut found = false;
        for ch in payload.chars() {
            if escape_next {
                escape_next = false;
                continue;
            }
            match ch {
                '\\' if in_string => escape_next = true,
                '"' => in_string = !in_string,
                c if in_string && c.is_control() && (c as u32) < 0x20 => {
                    found = true;
                    break;
                }
                _ => {}
            }
        }
        found
    };
    if !needs_work {
        return Cow::Borrowed(payload);
    }

    let mut out = String::with_capacity(payload.len() + 16);
    let mut in_string = false;
    let mut escape_next = false;
    for ch in payload.chars() {
        if escape_next {
            escape_next = false;
            out.push(ch);
            continue;
        }
        match ch {
            '\\' if in_string => {
                escape_next = true;
                out.push(ch);
            }
            '"' => {
                in_string = !in_string;
                out.push(ch);
            }
            c if in_string && (c as u32) < 0x20 => match c {
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{08}' => out.push_str("\\b"),
                '\u{0C}' => out.push_str("\\f"),
                other => out.push_str(&format!("\\u{:04x}", other as u32)),
            },
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
