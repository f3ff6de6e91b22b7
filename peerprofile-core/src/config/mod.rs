//! Configuration management for PeerProfile
//!
//! This module provides environment-based configuration management with
//! support for defaults, file loading and validation.

use serde::{Deserialize, Serialize};
use std::env;

use crate::core_kv::{StoreKind, StoreOptions, SyncPolicy};

mod error;

pub use error::ConfigError;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Identity of the owned store
    pub identity: IdentityConfig,

    /// Options forwarded verbatim to the distributed store engine
    pub store: StoreOptions,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Identity of the logical store this process owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Owning application id
    pub app_id: String,

    /// Logical store id within that application
    pub store_id: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON formatting
    pub json_format: bool,

    /// Include target module
    pub with_target: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identity: IdentityConfig::default(),
            store: StoreOptions::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self { app_id: "peerprofile".to_string(), store_id: "profiles".to_string() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json_format: false, with_target: true }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables follow the pattern: PEERPROFILE_<SECTION>_<KEY>
    /// Example: PEERPROFILE_STORE_ENCRYPTED=true
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Identity
        if let Ok(app_id) = env::var("PEERPROFILE_APP_ID") {
            config.identity.app_id = app_id;
        }
        if let Ok(store_id) = env::var("PEERPROFILE_STORE_ID") {
            config.identity.store_id = store_id;
        }

        // Store options
        if let Ok(kind) = env::var("PEERPROFILE_STORE_KIND") {
            config.store.kind = match kind.as_str() {
                "single-version" => StoreKind::SingleVersion,
                "device-collaboration" => StoreKind::DeviceCollaboration,
                other => {
                    return Err(ConfigError::InvalidValue(format!(
                        "Unknown store kind: {}",
                        other
                    )))
                }
            };
        }
        if let Ok(encrypted) = env::var("PEERPROFILE_STORE_ENCRYPTED") {
            config.store.encrypted = encrypted
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid encrypted flag: {}", e)))?;
        }
        if let Ok(sync) = env::var("PEERPROFILE_STORE_SYNC") {
            config.store.sync = match sync.as_str() {
                "manual" => SyncPolicy::Manual,
                "auto" => SyncPolicy::Auto,
                other => {
                    return Err(ConfigError::InvalidValue(format!(
                        "Unknown sync policy: {}",
                        other
                    )))
                }
            };
        }
        if let Ok(local_only) = env::var("PEERPROFILE_STORE_LOCAL_ONLY") {
            config.store.local_only = local_only.parse().map_err(|e| {
                ConfigError::InvalidValue(format!("Invalid local-only flag: {}", e))
            })?;
        }

        // Logging
        if let Ok(level) = env::var("PEERPROFILE_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(json) = env::var("PEERPROFILE_LOG_JSON") {
            config.logging.json_format = json
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid JSON flag: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identity.app_id.is_empty() {
            return Err(ConfigError::Validation("app_id must not be empty".to_string()));
        }

        if self.identity.store_id.is_empty() {
            return Err(ConfigError::Validation("store_id must not be empty".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(path, contents).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }
}
