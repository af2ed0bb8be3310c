//! Helper functions for creating specific error types

use super::types::RegistryError;

impl RegistryError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn xml<S: Into<String>>(message: S) -> Self {
        Self::Xml(message.into())
    }

    /// Numeric code when this is a domain error
    pub fn orcid_code(&self) -> Option<u16> {
        match self {
            Self::Orcid(error) => Some(error.code()),
            _ => None,
        }
    }
}
