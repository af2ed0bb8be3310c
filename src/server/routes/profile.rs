//! Profile settings route

use crate::core::models::Visibility;
use crate::core::source::Caller;
use crate::server::negotiation::Format;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::info;

/// Configure profile routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::put().to(put_profile));
}

/// Settings that drive visibility defaulting
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProfileSettings {
    #[serde(default)]
    pub claimed: bool,
    #[serde(default)]
    pub default_visibility: Option<Visibility>,
}

/// Create the profile, or update its settings when it already exists
async fn put_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    _caller: Caller,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let orcid = path.into_inner();
    let settings: ProfileSettings = if body.is_empty() {
        ProfileSettings::default()
    } else {
        Format::of_request(&req).decode(&body)?
    };

    let database = state.registry.database();
    let (status, profile) = match database.find_profile(&orcid).await? {
        Some(_) => (
            StatusCode::OK,
            database
                .update_profile_settings(&orcid, settings.claimed, settings.default_visibility)
                .await?,
        ),
        None => {
            info!("Creating profile {}", orcid);
            (
                StatusCode::CREATED,
                database
                    .create_profile(&orcid, settings.claimed, settings.default_visibility)
                    .await?,
            )
        }
    };

    Format::accepted(&req).respond(status, "profile", &profile)
}
