//! HTTP route modules
//!
//! Record routes live under `/v3/{orcid}`; the health check sits at the root.

pub mod addresses;
pub mod emails;
pub mod health;
pub mod profile;
pub mod works;

use crate::server::negotiation::Format;
use crate::utils::error::Result;
use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

/// Mount every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes).service(
        web::scope("/v3/{orcid}")
            .configure(works::configure_routes)
            .configure(addresses::configure_routes)
            .configure(emails::configure_routes)
            .configure(profile::configure_routes),
    );
}

/// 201 response with a `Location` header, encoded as the caller prefers
pub(crate) fn created<T: Serialize>(
    req: &HttpRequest,
    root: &str,
    value: &T,
    location: String,
) -> Result<HttpResponse> {
    let format = Format::accepted(req);
    let body = format.encode(root, value)?;

    Ok(HttpResponse::Created()
        .insert_header((LOCATION, location))
        .content_type(format.content_type())
        .body(body))
}
