//! Structured error taxonomy for backend calls.
//!
//! The backend reports failures as plain-text bodies, not error codes.
//! Pages never match on that text themselves; the substring translation
//! lives only inside [`ApiError::friendly_message`] as a documented
//! stopgap until the backend emits structured codes.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error produced by the REST layer. Every variant is scoped to a single
/// view and recoverable by retry or navigation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No stored session (or an empty token); the request was never sent.
    #[error("You are not logged in. Please log in to continue.")]
    NoSession,
    /// The server rejected the token (401).
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,
    /// The token is valid but not allowed here (403).
    #[error("Access denied for this account or role.")]
    Forbidden,
    /// Any other non-2xx response, carrying the body text verbatim.
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    /// The request never completed (DNS, refused connection, aborted).
    #[error("Network error: {0}")]
    Network(String),
    /// The response arrived but was not the expected JSON shape.
    #[error("Unexpected server response: {0}")]
    Decode(String),
    /// Called outside a browser context (server-side render path).
    #[error("Not available outside the browser.")]
    Unavailable,
}

impl ApiError {
    /// Map an HTTP status and body into the right variant.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            _ => Self::Status { status, body },
        }
    }

    /// True when the fix is to log in again.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        matches!(self, Self::NoSession | Self::Unauthorized)
    }

    /// User-facing message, translating the known backend error texts for
    /// money movement into fixed phrases.
    #[must_use]
    pub fn friendly_message(&self) -> String {
        if let Self::Status { body, .. } = self {
            if body.contains("inactive") {
                return "Cannot use this account - it is inactive.".to_owned();
            }
            if body.contains("Insufficient") {
                return "Insufficient balance in your account.".to_owned();
            }
            if !body.trim().is_empty() {
                return body.trim().to_owned();
            }
        }
        self.to_string()
    }
}
