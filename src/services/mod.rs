//! Thin wrappers over the console endpoints.
//!
//! Each wrapper issues exactly one request through [`ApiClient`](crate::api::ApiClient)
//! and returns the parsed payload or lets the failure propagate. Credential
//! attachment and 401 handling live in the pipeline, never here.

pub mod auth;
pub mod billing;
pub mod keys;
pub mod mfa;
pub mod overview;
pub mod usage;

use serde::Deserialize;

/// The `{"data": [...]}` envelope the list endpoints use.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct DataEnvelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
}
