//! Email routes

use crate::core::models::{Email, EmailCandidate};
use crate::core::source::Caller;
use crate::server::negotiation::Format;
use crate::server::routes::created;
use crate::server::state::AppState;
use crate::utils::error::{OrcidError, Result};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};

/// Configure email routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/email")
            .route(web::get().to(list_emails))
            .route(web::post().to(add_email)),
    )
    .service(web::resource("/email/{address}").route(web::delete().to(remove_email)));
}

/// Emails of a profile: `{"email":[...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailList {
    #[serde(rename = "email", default)]
    pub emails: Vec<Email>,
}

async fn list_emails(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let emails = state.registry.emails().get_emails(&path).await?;
    Format::accepted(&req).respond(StatusCode::OK, "emails", &EmailList { emails })
}

async fn add_email(
    state: web::Data<AppState>,
    path: web::Path<String>,
    caller: Caller,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let orcid = path.into_inner();
    let candidate: EmailCandidate = Format::of_request(&req).decode(&body)?;

    let email = state
        .registry
        .emails()
        .add_email(&orcid, &caller, candidate)
        .await?;

    let location = format!("/v3/{}/email", orcid);
    created(&req, "email", &email, location)
}

async fn remove_email(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    _caller: Caller,
) -> Result<HttpResponse> {
    let (orcid, address) = path.into_inner();
    if state.registry.emails().remove_email(&orcid, &address).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(OrcidError::not_found("email").into())
    }
}
