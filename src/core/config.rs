//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! a `.env` file, environment variables, or defaults.

use super::transport::TransportConfig;
use crate::domains::toggl::{DEFAULT_BASE_URL, PacingPolicy};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default `created_with` value sent with new time entries.
pub const DEFAULT_CREATED_WITH: &str = "toggl-mcp-server";

/// Default upstream request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default pause between bulk creations in milliseconds.
pub const DEFAULT_BULK_PACING_MS: u64 = 1000;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Toggl credentials.
    pub credentials: CredentialsConfig,

    /// Upstream API settings.
    pub api: ApiConfig,

    /// Bulk creation settings.
    pub bulk: BulkConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Toggl credentials.
///
/// The token is optional at startup; tools report its absence per call.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Toggl Track API token (Profile settings > API Token).
    pub toggl_api_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "toggl_api_token",
                &self.toggl_api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Upstream API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Toggl Track v9 API, without trailing slash.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Value sent as `created_with` on new entries.
    pub created_with: String,
}

/// Bulk creation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkConfig {
    /// Pause after each bulk creation, in milliseconds. 0 disables pacing.
    pub pacing_interval_ms: u64,
}

impl BulkConfig {
    /// The pacing policy for bulk creation.
    pub fn pacing(&self) -> PacingPolicy {
        PacingPolicy::from_millis(self.pacing_interval_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "toggl-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            created_with: DEFAULT_CREATED_WITH.to_string(),
        }
    }
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            pacing_interval_ms: DEFAULT_BULK_PACING_MS,
        }
    }
}

/// Read a non-blank environment variable.
fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a numeric environment variable, keeping `default` when it does not parse.
fn env_number(key: &str, default: u64) -> u64 {
    match env_value(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.env` file and environment variables.
    ///
    /// Toggl settings use the `TOGGL_` prefix, everything else `MCP_`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(name) = env_value("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = env_value("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(timestamps) = env_value("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps =
                !matches!(timestamps.to_lowercase().as_str(), "false" | "0");
        }

        config.transport = TransportConfig::from_env();

        config.credentials.toggl_api_token = env_value("TOGGL_API_TOKEN");

        if let Some(url) = env_value("TOGGL_API_URL") {
            config.api.base_url = url.trim_end_matches('/').to_string();
        }

        config.api.request_timeout_secs =
            env_number("MCP_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);

        if let Some(created_with) = env_value("MCP_CREATED_WITH") {
            config.api.created_with = created_with;
        }

        config.bulk.pacing_interval_ms = env_number("MCP_BULK_PACING_MS", DEFAULT_BULK_PACING_MS);

        config
    }
}
