/*
[INPUT]:  Error sources (HTTP, API error bodies, serialization)
[OUTPUT]: Structured error types and extracted user-facing messages
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the taskboard client
#[derive(Error, Debug)]
pub enum TaskboardError {
    /// HTTP request failed (connection, timeout, body decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered 401 - the session is no longer valid
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// API returned a non-2xx, non-401 response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl TaskboardError {
    /// Whether the error is a 401 and must be routed to session-expiry
    /// handling instead of a normal error banner.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, TaskboardError::Unauthorized { .. })
    }

    /// The message suitable for display to the user.
    ///
    /// For API-sourced errors this is the extracted server message; other
    /// failures fall back to their display form.
    pub fn user_message(&self) -> String {
        match self {
            TaskboardError::Unauthorized { message } | TaskboardError::Api { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for taskboard client operations
pub type Result<T> = std::result::Result<T, TaskboardError>;

/// Extract a single human-readable message from a failed response body.
///
/// Priority: a non-empty `errors` array (each entry's `msg` joined with
/// ", "), then a string `message` field, then the status line. Parse
/// failures fall through to the status line; this never fails.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(errors) = value.get("errors").and_then(Value::as_array) {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            if !messages.is_empty() {
                return messages.join(", ");
            }
        }
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    status_line(status)
}

fn status_line(status: StatusCode) -> String {
    format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Error")
    )
}
