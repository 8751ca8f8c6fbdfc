//! Session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the only component that writes session state. Everything
//! else reaches it through the injectable [`SessionStore`] trait, so tests
//! can swap the durable file backend for [`MemorySessionStore`].
//!
//! LAYOUT
//! ======
//! Two string-keyed entries: `auth_token` holds the bearer token and
//! `user_vni` holds the account identifier as a decimal string.

pub mod file;
pub mod memory;

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key for the account identifier.
pub const ACCOUNT_ID_KEY: &str = "user_vni";

/// Authenticated state of the client: a bearer token and the account it
/// belongs to. Both are written and cleared together.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub account_id: i64,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, account_id: i64) -> Self {
        Self { token: token.into(), account_id }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// Errors raised by durable session backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the session file failed.
    #[error("session file I/O failed at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The session entries could not be encoded.
    #[error("session encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Key/value persistence for the current session.
///
/// `save` must be all-or-nothing from the caller's perspective; `clear` is
/// idempotent. Reads never touch the network.
pub trait SessionStore: Send + Sync {
    /// Persist `session`, replacing any prior one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend could not persist the pair. In
    /// that case the previous session (if any) is still in place.
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Stored bearer token, or `None` when there is no session.
    fn token(&self) -> Option<String>;

    /// Stored account identifier, or `None` when absent or unreadable.
    fn account_id(&self) -> Option<i64>;

    /// Remove both entries. Clearing an empty store is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend could not remove its data.
    fn clear(&self) -> Result<(), StoreError>;

    /// Both halves of the session, when both are present.
    ///
    /// Backends should override this to read both entries from one snapshot.
    fn load(&self) -> Option<Session> {
        Some(Session { token: self.token()?, account_id: self.account_id()? })
    }
}

// =============================================================================
// ENTRY ENCODING
// =============================================================================

pub(crate) type Entries = BTreeMap<String, String>;

pub(crate) fn write_entries(entries: &mut Entries, session: &Session) {
    entries.insert(TOKEN_KEY.to_owned(), session.token.clone());
    entries.insert(ACCOUNT_ID_KEY.to_owned(), session.account_id.to_string());
}

pub(crate) fn remove_entries(entries: &mut Entries) {
    entries.remove(TOKEN_KEY);
    entries.remove(ACCOUNT_ID_KEY);
}

pub(crate) fn read_token(entries: &Entries) -> Option<String> {
    entries.get(TOKEN_KEY).cloned()
}

/// Parse the stored account identifier. A value that is not a base-10
/// integer is reported and treated as absent.
pub(crate) fn read_account_id(entries: &Entries) -> Option<i64> {
    let raw = entries.get(ACCOUNT_ID_KEY)?;
    match raw.trim().parse::<i64>() {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!(error = %e, value = %raw, "stored account id is not an integer; ignoring");
            None
        }
    }
}

pub(crate) fn read_session(entries: &Entries) -> Option<Session> {
    Some(Session { token: read_token(entries)?, account_id: read_account_id(entries)? })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
