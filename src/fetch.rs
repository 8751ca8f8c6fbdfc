//! Session-aware protected reads.
//!
//! ERROR HANDLING
//! ==============
//! A 401 means the stored session is no longer accepted. This component, not
//! the pipeline, reacts: it logs out, redirects to the login route, and
//! returns [`AuthError::SessionExpired`]. Every other non-success status is an
//! [`AuthError::Request`] with no session side effects.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::Authenticator;
use crate::error::{AuthError, FETCH_FALLBACK_MESSAGE};
use crate::net::pipeline::RequestOptions;
use crate::net::types::{DetectionFeed, Profile, detail_message};
use crate::router::Navigator;
use crate::router::routes::LOGIN_ROUTE;

#[derive(Clone)]
pub struct SessionAwareFetch {
    auth: Authenticator,
    navigator: Arc<dyn Navigator>,
}

impl SessionAwareFetch {
    #[must_use]
    pub fn new(auth: Authenticator, navigator: Arc<dyn Navigator>) -> Self {
        Self { auth, navigator }
    }

    /// GET `url` through the pipeline and decode the body as `T`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::SessionExpired`] on 401, after logout and redirect.
    /// - [`AuthError::Request`] on any other non-2xx; message from `detail`
    ///   or [`FETCH_FALLBACK_MESSAGE`].
    /// - [`AuthError::Decode`] / [`AuthError::Transport`] otherwise.
    pub async fn fetch_protected<T: DeserializeOwned>(&self, url: &str) -> Result<T, AuthError> {
        let response = self
            .auth
            .pipeline()
            .request(Method::GET, url, RequestOptions::default())
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(url, "session rejected by server; logging out");
            self.auth.logout();
            self.navigator.redirect(LOGIN_ROUTE);
            return Err(AuthError::SessionExpired);
        }

        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "protected request failed");
            return Err(AuthError::Request(detail_message(&body, FETCH_FALLBACK_MESSAGE)));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Current user's profile from `GET /v1/auth/me`.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_protected`].
    pub async fn current_profile(&self) -> Result<Profile, AuthError> {
        self.fetch_protected(&self.auth.endpoints().current_user())
            .await
    }

    /// Detection feed from `GET /detections`.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_protected`].
    pub async fn detections(&self) -> Result<DetectionFeed, AuthError> {
        self.fetch_protected(&self.auth.endpoints().detections())
            .await
    }
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;
