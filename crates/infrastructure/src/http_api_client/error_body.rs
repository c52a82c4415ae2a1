//! Extraction of a user-facing message from error response bodies.
//!
//! The backend answers errors in one of three known shapes: a
//! field-validation object (`{"field": ["message", ...]}`), an object with a
//! `detail` string, or a plain string body. Anything else is passed through
//! verbatim.

use serde_json::Value;

pub(super) fn error_message_from_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty response body>".to_owned();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            if let Some(detail) = map.get("detail").and_then(Value::as_str) {
                return detail.to_owned();
            }

            let mut parts = Vec::new();
            for (field, value) in &map {
                match value {
                    Value::Array(messages) => {
                        let joined = messages
                            .iter()
                            .filter_map(Value::as_str)
                            .collect::<Vec<_>>()
                            .join(", ");
                        if !joined.is_empty() {
                            parts.push(format!("{field}: {joined}"));
                        }
                    }
                    Value::String(message) => parts.push(format!("{field}: {message}")),
                    _ => {}
                }
            }

            if parts.is_empty() {
                trimmed.to_owned()
            } else {
                parts.join("; ")
            }
        }
        Ok(Value::String(message)) => message,
        _ => trimmed.to_owned(),
    }
}
