//! Error types shared by the API client, the credential store, and the
//! session context.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as typed values and surfaced once to the screen that
//! initiated them. Nothing here retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::{Map, Value};

/// Failure talking to the authentication API.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status and no structured body.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// The server rejected the request with a field-keyed error object.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, errors: Map<String, Value> },
    /// A 2xx body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response body.
    ///
    /// JSON objects become [`ApiError::Rejected`]; anything else keeps the
    /// raw text.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(errors)) => Self::Rejected { status, errors },
            _ => Self::Status { status, body: body.to_owned() },
        }
    }

    /// `(key, text)` pairs of a rejection body, in key order. Empty for every
    /// other variant.
    pub fn field_messages(&self) -> Vec<(String, String)> {
        match self {
            Self::Rejected { errors, .. } => {
                let mut pairs: Vec<_> = errors
                    .iter()
                    .map(|(key, value)| (key.clone(), message_text(value)))
                    .collect();
                pairs.sort_by(|a, b| a.0.cmp(&b.0));
                pairs
            }
            _ => Vec::new(),
        }
    }
}

/// Display text for one error value. Servers send either a string or a list
/// of strings per key.
pub fn message_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(message_text).collect::<Vec<_>>().join(" "),
        other => other.to_string(),
    }
}

/// Failure reading or writing persisted credentials.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("persistent storage is not available")]
    Unavailable,
    #[error("failed to read `{key}` from storage")]
    Read { key: String },
    #[error("failed to write `{key}` to storage")]
    Write { key: String },
}

/// Failure of a session operation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// `refresh` was called without an authenticated session.
    #[error("no authenticated session")]
    NotAuthenticated,
    /// Another session request is still in flight.
    #[error("another request is in progress")]
    Busy,
}
