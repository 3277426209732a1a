//! Error types for the REST transport.

use thiserror::Error;

/// Errors that can occur while talking to the REST API.
///
/// `Display` is the human-readable message the session stores and the
/// notifications show.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("Network Error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The HTTP client could not be built or the URL is malformed.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Builds a status error, preferring the server's own `message` field.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_owned)
            })
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        ApiError::Status { status, message }
    }

    /// Human-readable message for the session error field and notifications.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if e.is_builder() {
            ApiError::Configuration(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
