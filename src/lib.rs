//! # dashboard-client
//!
//! Client-side session and request layer for the detection dashboard API.
//!
//! A login exchanges credentials for a bearer token that is persisted by a
//! [`session::SessionStore`]. Every API call goes through the
//! [`net::pipeline::RequestPipeline`], which attaches that token. Protected
//! reads via [`fetch::SessionAwareFetch`] turn a 401 into logout plus a
//! redirect, and the [`router::Router`] guards every transition with a local
//! session-presence check.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod net;
pub mod router;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::Authenticator;
pub use client::DashboardClient;
pub use config::ClientConfig;
pub use error::AuthError;
pub use fetch::SessionAwareFetch;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
