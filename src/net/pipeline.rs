//! Authenticated request pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound API call goes through [`RequestPipeline::request`], which
//! decorates it with `Content-Type: application/json` and, when the session
//! store holds a token, `Authorization: Bearer <token>`.
//!
//! The pipeline never interprets response status. Reacting to 401 belongs to
//! [`crate::fetch::SessionAwareFetch`], which keeps this layer stateless and
//! usable for calls that must not trigger a global logout (login itself).

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Response};

use crate::error::AuthError;
use crate::session::SessionStore;

/// Caller-supplied request decoration.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Options carrying a JSON body.
    #[must_use]
    pub fn json(body: serde_json::Value) -> Self {
        Self { headers: HeaderMap::new(), body: Some(body) }
    }

    /// Add a caller header. An `Authorization` header set here is ignored
    /// by the pipeline.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP client that reads the session store on every call.
#[derive(Clone)]
pub struct RequestPipeline {
    http: reqwest::Client,
    store: Arc<dyn SessionStore>,
}

impl RequestPipeline {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_client(reqwest::Client::new(), store)
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, store: Arc<dyn SessionStore>) -> Self {
        Self { http, store }
    }

    /// The session store this pipeline reads tokens from.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// The `Authorization` value the pipeline would attach right now.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidHeader`] if the stored token contains
    /// characters that cannot appear in a header.
    pub fn auth_header(&self) -> Result<Option<HeaderValue>, AuthError> {
        self.store
            .token()
            .map(|token| bearer_value(&token))
            .transpose()
    }

    /// Send a request decorated with the current session, if any.
    ///
    /// Absence of a token is not an error; the call goes out unauthenticated
    /// and the server decides. The raw response is returned regardless of
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] if the request cannot be sent, or
    /// [`AuthError::InvalidHeader`] if the token is not a valid header value.
    pub async fn request(&self, method: Method, url: &str, options: RequestOptions) -> Result<Response, AuthError> {
        let token = self.store.token();
        self.send(method, url, options, token.as_deref()).await
    }

    /// Send a request that never carries a session, such as the login call.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] if the request cannot be sent.
    pub async fn request_unauthenticated(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, AuthError> {
        self.send(method, url, options, None).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> Result<Response, AuthError> {
        let headers = merge_headers(&options.headers, token)?;
        tracing::debug!(%method, url, authenticated = token.is_some(), "sending request");

        let mut request = self.http.request(method, url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(serde_json::to_vec(&body)?);
        }
        Ok(request.send().await?)
    }
}

/// Merge caller headers over the JSON content type, then replace any
/// `Authorization` header with one computed from `token`.
///
/// # Errors
///
/// Returns [`AuthError::InvalidHeader`] if `token` is not a valid header value.
pub fn merge_headers(caller: &HeaderMap, token: Option<&str>) -> Result<HeaderMap, AuthError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.extend(caller.clone());
    headers.remove(AUTHORIZATION);
    if let Some(token) = token {
        headers.insert(AUTHORIZATION, bearer_value(token)?);
    }
    Ok(headers)
}

fn bearer_value(token: &str) -> Result<HeaderValue, AuthError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
