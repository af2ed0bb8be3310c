//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::Registry;
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Record managers and their store
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Get registry configuration
    pub fn config(&self) -> &Config {
        self.registry.config()
    }
}
