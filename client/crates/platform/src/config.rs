//! Client Configuration
//!
//! External configuration values: backend base URL, generative endpoint,
//! and where the credential is persisted.

use std::path::PathBuf;

use thiserror::Error;

/// Default generative text endpoint
pub const DEFAULT_GENERATIVE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Fixed storage key for the credential
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";

const ENV_API_BASE: &str = "BYTEE_API_BASE";
const ENV_GENERATIVE_URL: &str = "GEMINI_API_URL";
const ENV_GENERATIVE_KEY: &str = "GEMINI_API_KEY";
const ENV_STORAGE_DIR: &str = "BYTEE_STORAGE_DIR";
const ENV_TOKEN_KEY: &str = "BYTEE_TOKEN_KEY";

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("{name} is not a valid URL: {value}")]
    InvalidUrl { name: &'static str, value: String },
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend REST API base URL (no trailing slash)
    pub api_base: String,
    /// Generative text endpoint URL
    pub generative_url: String,
    /// Generative endpoint API key, sent as the `key` URL parameter
    pub generative_api_key: Option<String>,
    /// Directory holding the persisted credential
    pub storage_dir: PathBuf,
    /// Storage key (file name) of the credential
    pub token_key: String,
}

impl ClientConfig {
    /// Create config for a backend base URL with every other value defaulted
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: normalize_base(&api_base.into()),
            generative_url: DEFAULT_GENERATIVE_URL.to_string(),
            generative_api_key: None,
            storage_dir: default_storage_dir(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }

    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_base = read(ENV_API_BASE).ok_or(ConfigError::Missing(ENV_API_BASE))?;
        ensure_http(ENV_API_BASE, &api_base)?;

        let mut config = Self::new(api_base);

        if let Some(url) = read(ENV_GENERATIVE_URL) {
            ensure_http(ENV_GENERATIVE_URL, &url)?;
            config.generative_url = url;
        }
        config.generative_api_key = read(ENV_GENERATIVE_KEY);
        if let Some(dir) = read(ENV_STORAGE_DIR) {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(key) = read(ENV_TOKEN_KEY) {
            config.token_key = key;
        }

        Ok(config)
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    pub fn with_generative_api_key(mut self, key: impl Into<String>) -> Self {
        self.generative_api_key = Some(key.into());
        self
    }

    pub fn with_generative_url(mut self, url: impl Into<String>) -> Self {
        self.generative_url = url.into();
        self
    }

    /// Resolve a request path against the base URL
    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }

    /// Full path of the persisted credential
    pub fn token_path(&self) -> PathBuf {
        self.storage_dir.join(&self.token_key)
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn ensure_http(name: &'static str, value: &str) -> Result<(), ConfigError> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
        })
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("bytee")
}
