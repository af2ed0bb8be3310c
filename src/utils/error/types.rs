//! Error types for the registry

use super::orcid::OrcidError;
use thiserror::Error;

/// Result type alias for the registry
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Main error type for the registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// XML encoding or decoding errors
    #[error("XML error: {0}")]
    Xml(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Domain errors carrying a stable error code
    #[error("{0}")]
    Orcid(#[from] OrcidError),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<quick_xml::DeError> for RegistryError {
    fn from(error: quick_xml::DeError) -> Self {
        Self::Xml(error.to_string())
    }
}
