//! File-backed session store.
//!
//! DESIGN
//! ======
//! The session lives in a small JSON object keyed like browser local storage.
//! `save` writes a sibling temp file and renames it into place, so a reader
//! sees either the previous pair or the new one and never a torn write. Temp
//! names are unique per write; concurrent saves each rename their own file
//! and the last rename wins.
//!
//! An unreadable or malformed file counts as "no session" for reads; it is
//! logged and replaced on the next `save`.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Entries, Session, SessionStore, StoreError};

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Session store persisted to a JSON file so it survives process restarts.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        name.push(format!(".{}.{seq}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }

    fn read_entries(&self) -> Entries {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Entries::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file unreadable");
                return Entries::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file malformed");
                Entries::new()
            }
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let rendered = serde_json::to_vec_pretty(entries)?;
        let temp = self.temp_path();
        std::fs::write(&temp, rendered).map_err(|e| self.io_error(e))?;
        std::fs::rename(&temp, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&temp);
            self.io_error(e)
        })
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let mut entries = self.read_entries();
        super::write_entries(&mut entries, session);
        self.write_entries(&entries)
    }

    fn token(&self) -> Option<String> {
        super::read_token(&self.read_entries())
    }

    fn account_id(&self) -> Option<i64> {
        super::read_account_id(&self.read_entries())
    }

    fn load(&self) -> Option<Session> {
        super::read_session(&self.read_entries())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.read_entries();
        super::remove_entries(&mut entries);
        if !entries.is_empty() {
            return self.write_entries(&entries);
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
