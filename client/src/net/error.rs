//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Services propagate `ApiError` unchanged; only the hooks translate it into
//! UI text, preferring the server's `message` and otherwise falling back to a
//! per-operation string.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A 2xx response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// An upload was attempted without file contents.
    #[error("no file selected")]
    MissingFile,

    /// Requests are only issued from the browser, never during SSR.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body, extracting the
    /// backend's `{ "message": ... }` when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<super::types::ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        Self::Status { status, message }
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text shown to the user: the server message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}
