//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Tools domain configuration.
    pub tools: ToolsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the tools domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Upper bound on a single handler invocation, in seconds.
    /// `None` lets every call run to completion.
    pub call_timeout_secs: Option<u64>,
}

impl ToolsConfig {
    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout_secs.map(Duration::from_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Load logging settings on their own, so the subscriber can be
    /// installed before the rest of the configuration logs anything.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        logging
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "familysearch-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            tools: ToolsConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        if let Ok(timeout) = std::env::var("MCP_TOOL_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(0) => {
                    config.tools.call_timeout_secs = None;
                    info!("Tool call timeout disabled");
                }
                Ok(secs) => {
                    config.tools.call_timeout_secs = Some(secs);
                    info!("Tool call timeout set to {}s", secs);
                }
                Err(e) => {
                    warn!("Ignoring invalid MCP_TOOL_TIMEOUT_SECS '{}': {}", timeout, e);
                }
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "familysearch-mcp");
        assert_eq!(config.logging.level, "info");
        assert!(config.tools.call_timeout().is_none());
    }

    #[test]
    fn test_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TOOL_TIMEOUT_SECS", "30");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.call_timeout(), Some(Duration::from_secs(30)));
        unsafe {
            std::env::remove_var("MCP_TOOL_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_invalid_timeout_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TOOL_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert!(config.tools.call_timeout().is_none());
        unsafe {
            std::env::remove_var("MCP_TOOL_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_logging_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        assert_eq!(LoggingConfig::from_env().level, "debug");
        assert_eq!(Config::from_env().logging.level, "debug");
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
        assert_eq!(LoggingConfig::from_env().level, "info");
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "genealogy-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "genealogy-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
