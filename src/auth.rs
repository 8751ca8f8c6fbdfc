//! Login, logout, and the local session-presence check.
//!
//! SYSTEM CONTEXT
//! ==============
//! `is_authenticated` only looks at the session store. Whether the token is
//! still accepted is discovered lazily, when a protected call comes back 401
//! and [`crate::fetch::SessionAwareFetch`] clears the store.

use reqwest::Method;

use crate::error::{AuthError, LOGIN_FALLBACK_MESSAGE};
use crate::net::endpoints::Endpoints;
use crate::net::pipeline::{RequestOptions, RequestPipeline};
use crate::net::types::{Credentials, LoginResponse, detail_message};
use crate::router::guard::SessionCheck;
use crate::session::{Session, SessionStore};

/// Exchanges credentials for a session and owns the login/logout transitions.
#[derive(Clone)]
pub struct Authenticator {
    pipeline: RequestPipeline,
    endpoints: Endpoints,
}

impl Authenticator {
    #[must_use]
    pub fn new(pipeline: RequestPipeline, endpoints: Endpoints) -> Self {
        Self { pipeline, endpoints }
    }

    #[must_use]
    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn store(&self) -> &dyn SessionStore {
        self.pipeline.store().as_ref()
    }

    /// Log in with `email`/`password` and persist the resulting session.
    ///
    /// The session is fully written before this returns. A rejected login
    /// leaves the store untouched.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Authentication`] when the server answers non-2xx; the
    ///   message is the body's `detail` or [`LOGIN_FALLBACK_MESSAGE`].
    /// - [`AuthError::Decode`] when a 2xx body lacks the session fields.
    /// - [`AuthError::Transport`] / [`AuthError::Store`] on I/O failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let credentials = Credentials::new(email, password);
        let options = RequestOptions::json(serde_json::to_value(&credentials)?);
        let response = self
            .pipeline
            .request_unauthenticated(Method::POST, &self.endpoints.login(), options)
            .await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still means a rejected login.
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::debug!(error = %e, "login error body unreadable");
                String::new()
            });
            tracing::warn!(status = status.as_u16(), email = %email, "login rejected");
            return Err(AuthError::Authentication(detail_message(&body, LOGIN_FALLBACK_MESSAGE)));
        }

        let body = response.text().await?;
        let payload: LoginResponse = serde_json::from_str(&body)?;
        let session = payload.session();
        self.store().save(&session)?;

        match payload.email.as_deref() {
            Some(confirmed) => tracing::info!(email = %confirmed, account_id = session.account_id, "login succeeded"),
            None => tracing::info!(account_id = session.account_id, "login succeeded"),
        }
        Ok(session)
    }

    /// Clear the stored session. No network call; never fails. A backend
    /// error is logged and otherwise ignored.
    pub fn logout(&self) {
        match self.store().clear() {
            Ok(()) => tracing::info!("session cleared"),
            Err(e) => tracing::error!(error = %e, "failed to clear session"),
        }
    }

    /// Whether a session token is present locally. Does not contact the server.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store().token().is_some()
    }

    /// Account identifier of the stored session, if any.
    #[must_use]
    pub fn account_id(&self) -> Option<i64> {
        self.store().account_id()
    }
}

impl SessionCheck for Authenticator {
    fn is_authenticated(&self) -> bool {
        Authenticator::is_authenticated(self)
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
