//! HTTP response handling for errors

use super::orcid::{OrcidError, OrcidErrorCode};
use super::types::RegistryError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

impl RegistryError {
    /// Collapse any registry error into the client-facing error object.
    ///
    /// Infrastructure failures never leak their internals; they surface as a
    /// persistence error with a short description.
    pub fn into_orcid_error(self) -> OrcidError {
        match self {
            RegistryError::Orcid(error) => error,
            RegistryError::Database(error) => OrcidError::persistence(error.to_string()),
            RegistryError::Serialization(error) => OrcidError::malformed_request(error.to_string()),
            RegistryError::Xml(message) => OrcidError::malformed_request(message),
            other => OrcidError::persistence(other.to_string()),
        }
    }

    /// Borrowing variant of [`RegistryError::into_orcid_error`]
    pub fn to_orcid_error(&self) -> OrcidError {
        match self {
            RegistryError::Orcid(error) => error.clone(),
            RegistryError::Database(error) => OrcidError::persistence(error.to_string()),
            RegistryError::Serialization(error) => OrcidError::malformed_request(error.to_string()),
            RegistryError::Xml(message) => OrcidError::malformed_request(message.clone()),
            RegistryError::Config(_)
            | RegistryError::Yaml(_)
            | RegistryError::Io(_)
            | RegistryError::Internal(_) => {
                OrcidError::new(OrcidErrorCode::Persistence, "An internal error occurred")
            }
        }
    }
}

impl ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::Orcid(error) => error.error_code.http_status(),
            RegistryError::Serialization(_) | RegistryError::Xml(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_orcid_error())
    }
}
