//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (`sqlite:` or `postgres://`)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Run pending migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
    /// Log every SQL statement
    #[serde(default)]
    pub sql_logging: bool,
    /// Level SQL statements are logged at
    #[serde(default = "default_sql_log_level")]
    pub sql_log_level: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            run_migrations: true,
            sql_logging: false,
            sql_log_level: default_sql_log_level(),
        }
    }
}

impl DatabaseConfig {
    /// In-memory SQLite database, single connection so every query sees the same data
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }

    /// Parsed SQL log level, `Debug` when unrecognized
    pub fn sql_level_filter(&self) -> log::LevelFilter {
        self.sql_log_level
            .parse()
            .unwrap_or(log::LevelFilter::Debug)
    }
}
