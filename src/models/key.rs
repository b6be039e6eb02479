//! Console API key types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An API key as listed in the console. The secret itself is never returned
/// here; only the prefix and last four characters survive creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleKey {
    pub id: String,
    pub key_name: String,
    pub key_prefix: String,
    pub key_last_four: String,
    /// `test` or `live`
    pub environment: String,
    pub is_active: bool,
    pub usage_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Response to creating or rotating a key. `api_key` is the full secret,
/// shown exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedKey {
    pub id: String,
    pub api_key: String,
}
