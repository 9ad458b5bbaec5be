use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::projects::Project;
use crate::protocol::errors::EnvelopeError;

/// Status string the server uses for successful envelope items.
pub const STATUS_OK: &str = "OK";

/// One item of the server's response envelope.
///
/// The server answers every command with a JSON array of these; the payload
/// of a list command is the `message` field of the first item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    pub status: String,
}

impl ResponseItem {
    /// Render the message field as display text, if present.
    ///
    /// Error items carry their human-readable reason in `message`.
    pub fn message_text(&self) -> Option<String> {
        self.message.as_ref().map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Extract the project list from a raw response body.
///
/// The body must be a non-empty JSON array whose first item has status
/// [`STATUS_OK`] and a `message` holding the project array. Every deviation
/// maps to its own [`EnvelopeError`] variant.
pub fn parse_projects(body: &str) -> Result<Vec<Project>, EnvelopeError> {
    let items: Vec<ResponseItem> =
        serde_json::from_str(body).map_err(|e| EnvelopeError::MalformedResponse {
            message: e.to_string(),
        })?;

    let first = items.first().ok_or(EnvelopeError::EmptyResponse)?;

    if first.status != STATUS_OK {
        return Err(EnvelopeError::ErrorStatus {
            status: first.status.clone(),
            message: first
                .message_text()
                .unwrap_or_else(|| "no message provided".to_string()),
        });
    }

    let message = first.message.as_ref().ok_or(EnvelopeError::MissingMessage)?;

    serde_json::from_value(message.clone()).map_err(|e| EnvelopeError::InvalidProjects {
        message: e.to_string(),
    })
}
