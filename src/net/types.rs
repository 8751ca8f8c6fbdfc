//! Wire DTOs for the dashboard API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON (`vni_cliente`, `created_at`); the
//! Rust side exposes the account identifier as `account_id`. Timestamps are
//! accepted as integers or integral floats because the detection store
//! round-trips numbers through a decimal type.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::session::Session;

// =============================================================================
// LOGIN
// =============================================================================

/// Transient login input. Never persisted; `Debug` hides the password.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.to_owned(), password: password.to_owned() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `POST /v1/auth/login` payload. Only the token and the account
/// identifier are required.
#[derive(Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "vni_cliente")]
    pub account_id: i64,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl LoginResponse {
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.access_token.clone(), self.account_id)
    }
}

// =============================================================================
// PROTECTED READS
// =============================================================================

/// The authenticated user's account, as returned by `GET /v1/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    /// Account identifier the session belongs to.
    #[serde(rename = "vni_cliente")]
    pub account_id: i64,
    /// Traffic-mirror target the account's sensor feeds from.
    pub traffic_mirror_target_id: String,
    /// Account creation time, seconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
}

/// One detection record. Fields beyond `id`/`timestamp` vary by detector and
/// are kept verbatim in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub id: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub timestamp: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `GET /detections` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionFeed {
    #[serde(default)]
    pub detections: Vec<Detection>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// ERROR BODIES
// =============================================================================

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Extract the server's `detail` message from an error body, or `fallback`
/// when the body is not JSON, has no `detail`, or `detail` is not a
/// non-empty string.
#[must_use]
pub fn detail_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .and_then(|detail| match detail {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| fallback.to_owned())
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
