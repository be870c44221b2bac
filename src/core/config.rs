//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! the command line, environment variables, or defaults.

use serde::{Deserialize, Serialize};

/// Default endpoint for Moby chat requests.
pub const DEFAULT_API_URL: &str = "https://api.triplewhale.com/willy/moby-chat";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Remote Triple Whale API configuration.
    pub remote: RemoteConfig,

    /// API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the remote Triple Whale API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Endpoint that answers Moby chat questions.
    pub api_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Configuration for Triple Whale API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// API key sent as the `x-api-key` header on every Moby request.
    /// Keys are issued through the Triple Whale console:
    /// https://triplewhale.tech/docs/manage/api-keys
    pub api_key: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values and the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-server-triplewhale".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            remote: RemoteConfig::default(),
            credentials: CredentialsConfig {
                api_key: api_key.into(),
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// The API key always comes from the command line; environment variables
    /// prefixed with `MCP_` override the remaining defaults. For example:
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_TRIPLEWHALE_API_URL`.
    pub fn from_env(api_key: impl Into<String>) -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::new(api_key);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(api_url) = std::env::var("MCP_TRIPLEWHALE_API_URL") {
            config.remote.api_url = api_url;
        }

        config
    }
}
