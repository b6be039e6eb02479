//! Session token store.
//!
//! `SessionStore` is the single source of truth for the current session
//! token. The in-memory value is authoritative; the injected `TokenStorage`
//! is a durability mirror seeded lazily at most once per process.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

use super::storage::{StorageError, TokenStorage};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("session token must not be empty")]
    EmptyToken,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    seeded: bool,
}

/// Holds the current session token and mirrors it to persistent storage.
///
/// One instance is created at startup and shared (via `Arc`) by the request
/// pipeline and the route guard. The token is only ever read or fully
/// replaced, never partially mutated.
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    state: Mutex<SessionState>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            storage,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Current token, seeding from persistent storage on first access.
    ///
    /// Storage read failures are swallowed: the store stays empty and the
    /// server remains the authority on whether a request is authorized.
    pub fn token(&self) -> Option<String> {
        let mut state = self.state.lock();
        self.seed_if_needed(&mut state);
        state.token.clone()
    }

    /// True iff a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// Replace the current token and mirror it to storage.
    ///
    /// Empty input is rejected; callers invalidating a session must use
    /// [`clear`](Self::clear) instead. The storage write is best-effort:
    /// the in-memory value governs even if the mirror fails.
    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }

        {
            let mut state = self.state.lock();
            state.token = Some(token.to_string());
            state.seeded = true;
        }

        if let Err(e) = self.storage.store(token) {
            warn!(error = %e, "failed to persist session token");
        }
        Ok(())
    }

    /// Drop the current token and remove the persisted copy.
    ///
    /// The in-memory value is always cleared. A storage removal failure is
    /// reported so the caller can fall back to removing the persisted
    /// credential directly. Clearing an already-cleared store is a no-op.
    pub fn clear(&self) -> Result<(), SessionError> {
        {
            let mut state = self.state.lock();
            state.token = None;
            state.seeded = true;
        }
        self.storage.remove()?;
        Ok(())
    }

    /// Forget the in-memory state so the next read re-seeds from storage.
    ///
    /// Teardown hook for tests and embedders that swap storage contents
    /// underneath a live store.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.token = None;
        state.seeded = false;
    }

    pub(crate) fn storage(&self) -> Arc<dyn TokenStorage> {
        Arc::clone(&self.storage)
    }

    fn seed_if_needed(&self, state: &mut SessionState) {
        if state.seeded {
            return;
        }
        state.seeded = true;
        match self.storage.load() {
            Ok(token) => {
                if token.is_some() {
                    debug!("seeded session token from persistent storage");
                }
                state.token = token.filter(|t| !t.is_empty());
            }
            Err(e) => {
                warn!(error = %e, "failed to read persisted session token");
            }
        }
    }
}
