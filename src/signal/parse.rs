//! Best-effort interpretation of free-form model replies.
//!
//! The model is asked for a bare JSON object but routinely wraps it in code
//! fences or surrounds it with prose. Parsing never fails outright: every
//! reply ends up as a [`Recommendation`], falling back to HOLD when the text
//! cannot be understood.

use serde_json::{Map, Value};
use tracing::warn;

use crate::constants::decision::DEFAULT_LOT;

use super::types::{Action, Recommendation};

/// Result of the guarded parse.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseOutcome {
    Parsed(Value),
    Failed(String),
}

/// Remove markdown code-fence markers.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Strict parse of the cleaned reply, then a retry on the outermost `{...}` span.
pub fn parse_reply(raw: &str) -> ParseOutcome {
    let cleaned = strip_code_fences(raw);

    let strict_err = match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => return ParseOutcome::Parsed(value),
        Err(e) => e,
    };

    if let Some(span) = object_span(&cleaned) {
        if span.len() < cleaned.len() {
            if let Ok(value) = serde_json::from_str::<Value>(span) {
                return ParseOutcome::Parsed(value);
            }
        }
    }

    ParseOutcome::Failed(strict_err.to_string())
}

fn object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Merge a parse outcome with the default-field rules.
pub fn normalize(outcome: ParseOutcome) -> Recommendation {
    let value = match outcome {
        ParseOutcome::Parsed(value) => value,
        ParseOutcome::Failed(err) => {
            warn!("JSON parse error: {}", err);
            return Recommendation::parse_failed();
        }
    };

    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            warn!("Model reply is JSON but not an object: {}", other);
            return Recommendation::invalid_structure();
        }
    };

    let action = match fields.get("action") {
        None | Some(Value::Null) => {
            warn!("Model reply has no action field");
            return Recommendation::invalid_structure();
        }
        Some(Value::String(s)) => match s.parse::<Action>() {
            Ok(action) => action,
            Err(raw) => {
                warn!("Model reply has unrecognized action: {}", raw);
                return Recommendation::unrecognized_action(&raw);
            }
        },
        Some(other) => {
            warn!("Model reply has non-string action: {}", other);
            return Recommendation::unrecognized_action(&other.to_string());
        }
    };

    Recommendation {
        action,
        lot: lot_of(&fields),
        reason: reason_of(&fields),
    }
}

fn lot_of(fields: &Map<String, Value>) -> f64 {
    let lot = match fields.get("lot") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    lot.filter(|l| l.is_finite()).unwrap_or(DEFAULT_LOT)
}

fn reason_of(fields: &Map<String, Value>) -> String {
    match fields.get("reason") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Full pipeline: fences, guarded parse, normalization.
pub fn interpret_reply(raw: &str) -> Recommendation {
    normalize(parse_reply(raw))
}
