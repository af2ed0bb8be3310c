//! Top-level registry configuration

#![allow(missing_docs)]

use super::*;
use crate::utils::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variables that override file settings
pub const ENV_HOST: &str = "REGISTRY_HOST";
pub const ENV_PORT: &str = "REGISTRY_PORT";
pub const ENV_DATABASE_URL: &str = "REGISTRY_DATABASE_URL";
pub const ENV_MAX_BATCH_SIZE: &str = "REGISTRY_MAX_BATCH_SIZE";
pub const ENV_LOG_LEVEL: &str = "REGISTRY_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "REGISTRY_LOG_FORMAT";

/// Main registry configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Bulk processing configuration
    #[serde(default)]
    pub bulk: BulkConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RegistryConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = parse_override(ENV_PORT, &port)?;
        }
        if let Some(url) = lookup(ENV_DATABASE_URL) {
            self.storage.database.url = url;
        }
        if let Some(size) = lookup(ENV_MAX_BATCH_SIZE) {
            self.bulk.max_batch_size = parse_override(ENV_MAX_BATCH_SIZE, &size)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = LogFormat::from_str(&format).map_err(RegistryError::Config)?;
        }
        Ok(self)
    }
}

fn parse_override<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| RegistryError::Config(format!("Invalid value for {}: {}", key, value)))
}
