use std::str::Utf8Error;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error payload the products backend sends with non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Error)]
#[error("response body is neither JSON nor UTF-8 text: {0}")]
pub struct UnreadableBody(#[from] pub Utf8Error);

/// Best-effort human readable detail for an error response body.
///
/// JSON bodies yield their `message` field when it is a non-empty string, otherwise
/// the compact JSON itself. Anything else is returned as plain text.
pub fn error_detail_from_body(raw: &[u8]) -> Result<String, UnreadableBody> {
    match serde_json::from_slice::<Value>(raw) {
        Ok(json) => Ok(message_field(&json).unwrap_or_else(|| json.to_string())),
        Err(_) => Ok(std::str::from_utf8(raw)?.to_string()),
    }
}

fn message_field(json: &Value) -> Option<String> {
    match json.get("message")? {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}
