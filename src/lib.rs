//! Client library for the customer console of the OTP API service.
//!
//! The console authenticates against the backend with an opaque session
//! token. This crate owns the session lifecycle around that token:
//!
//! - [`SessionStore`] holds the current token and mirrors it to an injected
//!   [`TokenStorage`] backend (file, memory, or OS keychain).
//! - [`ApiClient`] transports every request, attaching the
//!   `X-Session-Token` header when a token is present and reacting to a 401
//!   by clearing the session and redirecting to the login view.
//! - [`RouteGuard`] decides before each navigation whether the destination
//!   is reachable given the current session state.
//!
//! The `services` modules wrap the individual console endpoints (auth, API
//! keys, MFA users, billing, usage); each issues one request through the
//! pipeline and returns the parsed payload.
//!
//! ```no_run
//! use std::sync::Arc;
//! use otp_console::{
//!     ApiClient, Config, FileTokenStorage, GuardOutcome, HistoryNavigator, RouteGuard,
//!     SessionStore,
//! };
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let storage = Arc::new(FileTokenStorage::new(Config::session_token_path()?));
//! let session = Arc::new(SessionStore::new(storage));
//! let navigator = Arc::new(HistoryNavigator::new());
//! let client = ApiClient::new(&config.api_base_url, Arc::clone(&session), navigator)?;
//! let guard = RouteGuard::new(Arc::clone(&session));
//!
//! match guard.check("/dashboard/overview") {
//!     GuardOutcome::Allow => { /* render the view */ }
//!     GuardOutcome::Redirect(target) => { /* navigate to `target` instead */ }
//! }
//!
//! let keys = otp_console::services::keys::list_keys(&client).await?;
//! println!("{} keys", keys.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod router;
pub mod services;

pub use api::{ApiClient, ApiError, SESSION_TOKEN_HEADER};
#[cfg(feature = "keychain")]
pub use auth::KeyringTokenStorage;
pub use auth::{
    FileTokenStorage, MemoryTokenStorage, SessionError, SessionStore, StorageError, TokenStorage,
};
pub use config::Config;
pub use router::{
    GuardOutcome, HistoryNavigator, Navigator, RouteGuard, DEFAULT_LANDING_PATH, LOGIN_PATH,
};
