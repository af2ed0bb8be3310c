//! Configuration management for the registry
//!
//! This module handles loading, validation, and management of all registry configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{RegistryError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the registry
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Registry configuration
    pub registry: RegistryConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RegistryError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let registry: RegistryConfig = serde_yaml::from_str(content)
            .map_err(|e| RegistryError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { registry };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let registry = RegistryConfig::from_env()?;
        let config = Self { registry };

        config.validate()?;
        Ok(config)
    }

    /// Apply `REGISTRY_*` environment overrides on top of the loaded values
    pub fn with_env_overrides(self) -> Result<Self> {
        let registry = self.registry.with_env_overrides()?;
        let config = Self { registry };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.registry.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.registry.storage
    }

    /// Get bulk processing configuration
    pub fn bulk(&self) -> &BulkConfig {
        &self.registry.bulk
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.registry.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.registry
            .server
            .validate()
            .map_err(|e| RegistryError::Config(format!("Server config error: {}", e)))?;

        self.registry
            .storage
            .validate()
            .map_err(|e| RegistryError::Config(format!("Storage config error: {}", e)))?;

        self.registry
            .bulk
            .validate()
            .map_err(|e| RegistryError::Config(format!("Bulk config error: {}", e)))?;

        self.registry
            .logging
            .validate()
            .map_err(|e| RegistryError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.registry)
            .map_err(|e| RegistryError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
