//! Session management for the console client.
//!
//! This module provides:
//! - `SessionStore`: the single source of truth for the current session token
//! - `TokenStorage`: injectable persistent-storage backends (file, memory,
//!   OS keychain)
//!
//! The in-memory token is authoritative; persistent storage is a durability
//! mirror seeded lazily on first access.

pub mod session;
pub mod storage;

pub use session::{SessionError, SessionStore};
#[cfg(feature = "keychain")]
pub use storage::KeyringTokenStorage;
pub use storage::{FileTokenStorage, MemoryTokenStorage, StorageError, TokenStorage};
