//! Configuration loading for jina-search-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variable JINAAI_API_KEY (required)
//! 2. Environment variable JINA_SEARCH_ENDPOINT
//! 3. The file at JINA_SEARCH_CONFIG_PATH, or ~/.binks/jina-search.toml
//! 4. Default values

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Bearer credential for the Jina.ai API
pub const API_KEY_ENV: &str = "JINAAI_API_KEY";
/// Overrides `search.endpoint`
pub const ENDPOINT_ENV: &str = "JINA_SEARCH_ENDPOINT";
/// Explicit config file location
pub const CONFIG_PATH_ENV: &str = "JINA_SEARCH_CONFIG_PATH";
/// Jina.ai search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://s.jina.ai";

/// Errors that abort startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JINAAI_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid search endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
}

/// On-disk configuration (`jina-search.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Upstream search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL the percent-encoded query is appended to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

/// Resolved runtime configuration
///
/// Debug output redacts the API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub http: HttpConfig,
    api_key: SecretString,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::find_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::read_file(&path)?
            }
            _ => {
                tracing::info!("No config file found, using defaults");
                FileConfig::default()
            }
        };

        Self::resolve(file, |name| std::env::var(name).ok())
    }

    /// Apply environment overrides and the required credential to `file`
    pub fn resolve(
        mut file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(endpoint) = env(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            file.search.endpoint = endpoint.trim().to_string();
        }

        let api_key = env(API_KEY_ENV).ok_or(ConfigError::MissingApiKey)?;
        Self::from_parts(file, api_key)
    }

    /// Build a config without reading the environment
    pub fn from_parts(mut file: FileConfig, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let endpoint = file.search.endpoint.trim().trim_end_matches('/').to_string();
        url::Url::parse(&endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            source,
        })?;
        file.search.endpoint = endpoint;

        Ok(Self {
            search: file.search,
            http: file.http,
            api_key: SecretString::from(api_key),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.search.endpoint
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".binks").join("jina-search.toml"))
    }
}
