//! Configuration data models
//!
//! This module defines all configuration structures used by the registry.

#![allow(missing_docs)]

pub mod bulk;
pub mod logging;
pub mod registry;
pub mod server;
pub mod storage;

pub use bulk::*;
pub use logging::*;
pub use registry::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    16 * 1024 * 1024 // 16MB, enough for a full bulk request
}

pub fn default_database_url() -> String {
    "sqlite://registry.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_sql_log_level() -> String {
    "debug".to_string()
}

/// Hard upper bound of a bulk request
pub fn default_max_batch_size() -> usize {
    1000
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
