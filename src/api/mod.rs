//! REST pipeline for the console backend.
//!
//! This module provides the `ApiClient` every service wrapper transports
//! through. The client attaches the `X-Session-Token` credential header,
//! classifies failures into `ApiError`, and reacts to 401 responses by
//! clearing the session and forcing a login redirect.

pub mod client;
pub mod error;

pub use client::{ApiClient, SESSION_TOKEN_HEADER};
pub use error::ApiError;
