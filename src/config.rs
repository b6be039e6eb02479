//! Application configuration management.
//!
//! This module handles loading and saving the client configuration,
//! which includes the API base URL and the last used login email.
//!
//! Configuration is stored at `~/.config/otp-console/config.json`. The
//! `OTP_CONSOLE_API_URL` environment variable (or a `.env` file) overrides
//! the configured base URL.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config directory paths
const APP_NAME: &str = "otp-console";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// File holding the persisted session token
const SESSION_TOKEN_FILE: &str = "session_token";

/// Base URL of the console backend's v1 API
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Environment variable overriding the configured base URL
const API_URL_ENV: &str = "OTP_CONSOLE_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub last_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            last_email: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if not found)
        let _ = dotenvy::dotenv();

        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Default location for the file-backed session token storage.
    pub fn session_token_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(SESSION_TOKEN_FILE))
    }
}
