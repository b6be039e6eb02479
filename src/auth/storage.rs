//! Persistent storage backends for the session token.
//!
//! `TokenStorage` abstracts the client-local durable storage the session
//! token is mirrored to. The in-memory value held by `SessionStore` stays
//! authoritative; these backends only provide durability across restarts.

use std::path::PathBuf;

use parking_lot::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Durable key-value storage for the single session token.
///
/// All operations are best-effort from the caller's point of view: the
/// session layer swallows read failures and treats write failures as
/// non-fatal.
pub trait TokenStorage: Send + Sync {
    /// Read the persisted token, if any. An empty stored value counts as absent.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist the token, replacing any previous value.
    fn store(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the persisted token. Removing an absent token is a no-op.
    fn remove(&self) -> Result<(), StorageError>;
}

/// File-backed storage: the token is kept as a single string in a
/// well-known file under the user config directory.
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let token = contents.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(token.to_string()))
    }

    fn store(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and embedders that do not want persistence.
#[derive(Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded storage, as if a token had been persisted by a previous run.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.token.lock().clone().filter(|t| !t.is_empty()))
    }

    fn store(&self, token: &str) -> Result<(), StorageError> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        *self.token.lock() = None;
        Ok(())
    }
}

/// OS keychain storage for native deployments (requires the `keychain`
/// feature).
#[cfg(feature = "keychain")]
pub struct KeyringTokenStorage {
    service: String,
    account: String,
}

#[cfg(feature = "keychain")]
impl KeyringTokenStorage {
    pub fn new(service: &str, account: &str) -> Self {
        Self {
            service: service.to_string(),
            account: account.to_string(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry, StorageError> {
        keyring::Entry::new(&self.service, &self.account)
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

#[cfg(feature = "keychain")]
impl TokenStorage for KeyringTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match self.entry()?.get_password() {
            Ok(token) if token.is_empty() => Ok(None),
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    fn store(&self, token: &str) -> Result<(), StorageError> {
        self.entry()?
            .set_password(token)
            .map_err(|e| StorageError::Backend(e.to_string()))
    }

    fn remove(&self) -> Result<(), StorageError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }
}
