//! Session token storage.
//!
//! ARCHITECTURE
//! ============
//! The bearer token lives in a single slot behind [`Session`], the one owner
//! mediating every read and write. Call sites never touch the backing store
//! directly, so "who can mutate the token" stays answerable in one place.
//!
//! At most one token is stored at a time; a non-empty stored token is the
//! sole signal of "authenticated". Tokens are opaque backend-issued strings —
//! no expiry or signature checks happen client-side.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no config directory available for the session file")]
    NoStorePath,
}

/// Abstract single-slot token storage.
///
/// Storage is synchronous: the slot is written at most once per auth
/// operation and never concurrently within one.
pub trait TokenStore: Send + Sync {
    /// Read the stored token. A missing slot is `Ok(None)`, not an error.
    fn load(&self) -> Result<Option<String>, SessionError>;

    /// Overwrite the slot with `token`.
    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Delete the slot. Clearing an already-empty slot succeeds.
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-process store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.slot.lock().ok().and_then(|slot| slot.clone()))
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_owned());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
        Ok(())
    }
}

/// File-backed store: one file holding exactly the raw token string.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `<config_dir>/authkit/session`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoStorePath`] when the platform exposes no
    /// config directory.
    pub fn from_config_dir() -> Result<Self, SessionError> {
        let config_dir = dirs::config_dir().ok_or(SessionError::NoStorePath)?;
        Ok(Self::new(config_dir.join("authkit").join("session")))
    }
}

impl TokenStore for FileStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Single owner of the token slot.
pub struct Session {
    store: Box<dyn TokenStore>,
}

impl Session {
    #[must_use]
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by the default on-disk store.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoStorePath`] when no config directory exists.
    pub fn from_config_dir() -> Result<Self, SessionError> {
        Ok(Self::new(Box::new(FileStore::from_config_dir()?)))
    }

    /// The raw stored token, or `None` when logged out.
    ///
    /// # Errors
    ///
    /// Propagates storage read failures.
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        self.store.load()
    }

    /// True iff a non-empty token is present. No backend call, no expiry check.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.load(), Ok(Some(token)) if !token.is_empty())
    }

    /// Persist a freshly issued token.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures.
    pub fn store_token(&self, token: &str) -> Result<(), SessionError> {
        self.store.save(token)
    }

    /// Drop the stored token. Succeeds when no token is present.
    ///
    /// # Errors
    ///
    /// Propagates storage delete failures.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.clear()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
