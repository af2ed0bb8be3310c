//! Configuration section validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

/// Largest bulk request the registry will ever accept
pub const MAX_BATCH_SIZE_LIMIT: usize = 1000;

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating registry configuration");

        self.server.validate()?;
        self.storage.validate()?;
        self.bulk.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating storage configuration");
        self.database.validate()
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        if !self.url.starts_with("sqlite:")
            && !self.url.starts_with("postgresql://")
            && !self.url.starts_with("postgres://")
        {
            return Err("Only SQLite and PostgreSQL databases are supported".to_string());
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.max_connections > 1000 {
            return Err("Database max connections should not exceed 1000".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        if self.sql_log_level.parse::<log::LevelFilter>().is_err() {
            return Err(format!("Invalid SQL log level: {}", self.sql_log_level));
        }

        Ok(())
    }
}

impl Validate for BulkConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_batch_size == 0 {
            return Err("Bulk max batch size must be greater than 0".to_string());
        }

        if self.max_batch_size > MAX_BATCH_SIZE_LIMIT {
            return Err(format!(
                "Bulk max batch size should not exceed {}",
                MAX_BATCH_SIZE_LIMIT
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))?;

        Ok(())
    }
}
