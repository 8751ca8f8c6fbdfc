//! Client configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const API_BASE_URL_ENV: &str = "DASHBOARD_API_BASE_URL";
pub const SESSION_FILE_ENV: &str = "DASHBOARD_SESSION_FILE";

const SESSION_DIR_NAME: &str = "dashboard-client";
const SESSION_FILE_NAME: &str = "session.json";
const FALLBACK_SESSION_FILE: &str = ".dashboard-session.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL is not an absolute http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash (e.g. `"http://localhost:8080"`).
    pub base_url: String,
    /// Where the durable session store keeps its file.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `DASHBOARD_API_BASE_URL`: default `http://localhost:8080`
    /// - `DASHBOARD_SESSION_FILE`: default `<config dir>/dashboard-client/session.json`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the base URL is not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(API_BASE_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty());
        let session_file = std::env::var_os(SESSION_FILE_ENV)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Self::new(base_url.as_deref(), session_file)
    }

    /// Build config from explicit values, applying defaults for `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the base URL is not http(s).
    pub fn new(base_url: Option<&str>, session_file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(base_url.unwrap_or(DEFAULT_API_BASE_URL))?;
        let session_file = session_file.unwrap_or_else(default_session_file);
        Ok(Self { base_url, session_file })
    }
}

/// Trim whitespace and trailing slashes; require an http(s) scheme and host.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] for anything else.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_owned())),
    }
}

/// Per-user config directory, falling back to the working directory.
#[must_use]
pub fn default_session_file() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(FALLBACK_SESSION_FILE),
        |dir| dir.join(SESSION_DIR_NAME).join(SESSION_FILE_NAME),
    )
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
