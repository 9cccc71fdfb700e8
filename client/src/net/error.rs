//! Failure taxonomy for game-server requests.
//!
//! ERROR HANDLING
//! ==============
//! Every call site either logs and swallows these (login, end game) or turns
//! them into a status line (guesses). Nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, refused).
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    /// Non-2xx response carrying a `{"error": ...}` body from the game server.
    #[error("{0}")]
    Rejected(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP is only performed in the browser; SSR renders never issue calls.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response from its status code and raw body text.
    pub fn from_status(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error }) => Self::Rejected(error),
            Err(_) => Self::Status(status),
        }
    }
}
