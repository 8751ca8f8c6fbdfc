//! API endpoint URLs relative to the configured base.

/// URL builder for the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// `POST /v1/auth/login`
    #[must_use]
    pub fn login(&self) -> String {
        format!("{}/v1/auth/login", self.base_url)
    }

    /// `GET /v1/auth/me`
    #[must_use]
    pub fn current_user(&self) -> String {
        format!("{}/v1/auth/me", self.base_url)
    }

    /// `GET /detections`
    #[must_use]
    pub fn detections(&self) -> String {
        format!("{}/detections", self.base_url)
    }
}

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod tests;
