//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::core::Registry;
use crate::server::server::HttpServer;
use crate::storage::database::DatabaseBackendType;
use crate::utils::error::{RegistryError, Result};
use crate::utils::logging::init_logging;
use std::path::Path;
use tracing::{info, warn};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/registry.yaml";

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    registry: Option<Registry>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Serve an already built registry instead of connecting from config
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        if let Some(registry) = self.registry {
            return Ok(HttpServer::with_registry(registry));
        }

        let config = self
            .config
            .ok_or_else(|| RegistryError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

/// Load configuration from `path`, falling back to environment variables
/// when the file does not exist
pub async fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::from_file(path).await?.with_env_overrides()
    } else {
        warn!(
            "Configuration file {} not found, using defaults and environment",
            path.display()
        );
        Config::from_env()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server(config_path: Option<&Path>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    let config = load_config(path).await?;
    init_logging(config.logging())?;

    info!("Starting ORCID registry {}", crate::VERSION);
    info!(
        "Storage backend: {}",
        DatabaseBackendType::from_url(&config.storage().database.url).as_str()
    );

    let server = ServerBuilder::new().with_config(config).build().await?;
    info!("Server starting at: http://{}", server.config().address());
    info!("API endpoints:");
    info!("   GET  /health");
    info!("   POST /v3/{{orcid}}/works - bulk create/update");
    info!("   GET|POST /v3/{{orcid}}/work[/{{put_code}}]");
    info!("   GET|POST|PUT|DELETE /v3/{{orcid}}/address[es]");
    info!("   GET|POST|DELETE /v3/{{orcid}}/email");

    server.start().await
}
