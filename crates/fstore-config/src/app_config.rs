//! Application configuration
//!
//! Configuration loaded from `.fstore.toml`, with the API base URL
//! overridable through the environment (a `.env` file is honoured).

use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`AppConfig::api_server_url`]
pub const API_SERVER_URL_ENV: &str = "API_SERVER_URL";

/// Application configuration loaded from .fstore.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the file storage API (e.g., "http://localhost:8181")
    #[serde(default = "default_api_server_url")]
    pub api_server_url: String,

    /// Directory used by `get` when no `--outdir` is given
    #[serde(default)]
    pub download_dir: Option<String>,
}

fn default_api_server_url() -> String {
    "http://localhost:8181".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_server_url: default_api_server_url(),
            download_dir: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    ///
    /// Afterwards `.env` is loaded and `API_SERVER_URL` wins over the file.
    pub fn load() -> Self {
        let config = Self::from_file_or_default();

        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }

        config.with_env_override(std::env::var(API_SERVER_URL_ENV).ok())
    }

    fn from_file_or_default() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Apply an `API_SERVER_URL` value; blank values are ignored.
    pub fn with_env_override(mut self, api_server_url: Option<String>) -> Self {
        if let Some(url) = api_server_url.filter(|url| !url.trim().is_empty()) {
            log::debug!("{} overrides api_server_url: {}", API_SERVER_URL_ENV, url);
            self.api_server_url = url;
        }
        self
    }

    /// Base URL without trailing slash, ready for path concatenation
    pub fn base_url(&self) -> &str {
        self.api_server_url.trim_end_matches('/')
    }
}
