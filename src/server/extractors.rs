//! Request extractors

use crate::core::source::{Caller, Origin, SourceIdentity};
use crate::utils::error::{OrcidError, RegistryError};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{Ready, ready};

/// ORCID iD of a person acting as source
pub const SOURCE_ORCID_HEADER: &str = "X-Source-Orcid";
/// Client id of an application acting as source
pub const SOURCE_CLIENT_HEADER: &str = "X-Source-Client";
/// `ui` for calls made through the registry user interface
pub const SOURCE_ORIGIN_HEADER: &str = "X-Source-Origin";

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Read the caller identity from the source headers
pub fn caller_from_request(req: &HttpRequest) -> Result<Caller, RegistryError> {
    let source = SourceIdentity {
        source_orcid: header(req, SOURCE_ORCID_HEADER),
        source_client_id: header(req, SOURCE_CLIENT_HEADER),
    };
    if source.is_empty() {
        return Err(OrcidError::missing_caller().into());
    }

    let origin = match header(req, SOURCE_ORIGIN_HEADER) {
        Some(origin) if origin.eq_ignore_ascii_case("ui") => Origin::Ui,
        _ => Origin::Api,
    };

    Ok(Caller { source, origin })
}

impl FromRequest for Caller {
    type Error = RegistryError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(caller_from_request(req))
    }
}
