//! In-process session store.

use std::sync::{Mutex, PoisonError};

use super::{Entries, Session, SessionStore, StoreError};

/// Session store backed by a mutex-guarded map. Both entries change under a
/// single lock acquisition, so readers never see half a session.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<Entries>,
}

impl MemorySessionStore {
    /// Store pre-populated with `session`.
    #[must_use]
    pub fn with_session(session: &Session) -> Self {
        let mut entries = Entries::new();
        super::write_entries(&mut entries, session);
        Self { entries: Mutex::new(entries) }
    }

    /// Overwrite a single raw entry, bypassing session encoding.
    #[cfg(test)]
    pub(crate) fn set_raw(&self, key: &str, value: &str) {
        self.lock().insert(key.to_owned(), value.to_owned());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), StoreError> {
        super::write_entries(&mut self.lock(), session);
        Ok(())
    }

    fn token(&self) -> Option<String> {
        super::read_token(&self.lock())
    }

    fn account_id(&self) -> Option<i64> {
        super::read_account_id(&self.lock())
    }

    fn load(&self) -> Option<Session> {
        super::read_session(&self.lock())
    }

    fn clear(&self) -> Result<(), StoreError> {
        super::remove_entries(&mut self.lock());
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
