//! Failure taxonomy for remote API calls.
//!
//! ERROR HANDLING
//! ==============
//! Call sites never surface these to the view directly. Each action converts
//! the error into a display string with [`ApiError::user_message`], preferring
//! the server's own message and falling back to a fixed per-action text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered 401; the session has already been torn down.
    #[error("session expired")]
    Unauthorized,
    /// Any other non-2xx answer, with the server's message when it sent one.
    #[error("request failed ({status}){}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected { status: u16, message: Option<String> },
    /// A request or response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// No transport exists in this build (SSR or native).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message);
        Self::Rejected { status, message }
    }

    /// Message the server attached to this failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for the view: the server message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}
