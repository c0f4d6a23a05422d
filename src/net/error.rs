//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is local to the action or loader that triggered it. Only
//! [`ApiError::Unauthorized`] has a cross-cutting meaning: the session is gone
//! and the page must go back to the sign-in surface.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

pub const NETWORK_ERROR_MESSAGE: &str = "Server error. Please try again.";
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (offline, DNS, CORS, aborted).
    #[error("Server error. Please try again.")]
    Network(String),

    /// Non-success status; `message` is the server's `error` field verbatim or
    /// a context fallback when the body was not parseable.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The session is missing or expired.
    #[error("Please sign in again.")]
    Unauthorized,

    /// A success response carried a body of the wrong shape.
    #[error("Unexpected response from server.")]
    Decode(String),

    /// A browser-only call was made outside the WASM bundle.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response on a session-scoped endpoint.
    ///
    /// HTTP 401 always becomes [`ApiError::Unauthorized`]; it does not
    /// distinguish expiry from missing login.
    pub fn from_session_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::from_status(status, body, REQUEST_FAILED_MESSAGE)
    }

    /// Classify a non-success response where 401 is an ordinary error, such
    /// as bad credentials on the login form.
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| fallback.to_owned());
        Self::Status { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Text shown in an alert region.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Extract a non-empty `error` field from a JSON error body.
pub fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
}
