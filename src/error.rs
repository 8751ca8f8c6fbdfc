//! Error taxonomy for session and request operations.
//!
//! ERROR HANDLING
//! ==============
//! Three variants carry user-facing meaning: rejected credentials, an expired
//! session, and any other failed protected read. Transport and decode
//! failures propagate unclassified and are never retried here.

use crate::session::StoreError;

/// Fallback shown when a rejected login carries no `detail`.
pub const LOGIN_FALLBACK_MESSAGE: &str = "incorrect email or password";

/// Fallback shown when a failed protected read carries no `detail`.
pub const FETCH_FALLBACK_MESSAGE: &str = "error retrieving resource";

/// Fixed message surfaced after the server rejects a stored session.
pub const SESSION_EXPIRED_MESSAGE: &str = "session expired, please log in again";

/// Errors produced by login, protected fetches, and the request pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Login credentials were rejected by the server.
    #[error("{0}")]
    Authentication(String),

    /// A previously stored session was rejected. Logout and redirect have
    /// already happened by the time this is returned.
    #[error("session expired, please log in again")]
    SessionExpired,

    /// A protected call returned a non-success status other than 401.
    #[error("{0}")]
    Request(String),

    /// The HTTP request could not be completed.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body was not the JSON shape we expected.
    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A header value (usually the bearer token) is not representable.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The session store failed to persist a new session.
    #[error("session store failed: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Stable machine-readable code for the error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Authentication(_) => "E_AUTHENTICATION",
            Self::SessionExpired => "E_SESSION_EXPIRED",
            Self::Request(_) => "E_REQUEST",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Decode(_) => "E_DECODE",
            Self::InvalidHeader(_) => "E_INVALID_HEADER",
            Self::Store(_) => "E_STORE",
        }
    }

    /// Whether the message is meant to be shown to the user as-is
    /// (form error, banner) rather than reported as a generic failure.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Authentication(_) | Self::SessionExpired | Self::Request(_))
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
