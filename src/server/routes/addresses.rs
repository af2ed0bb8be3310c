//! Address routes

use crate::core::models::{Address, AddressCandidate};
use crate::core::source::Caller;
use crate::server::negotiation::Format;
use crate::server::routes::created;
use crate::server::state::AppState;
use crate::utils::error::{OrcidError, Result};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};

/// Configure address routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/addresses")
            .route(web::get().to(list_addresses))
            .route(web::put().to(sync_addresses)),
    )
    .service(web::resource("/address").route(web::post().to(create_address)))
    .service(
        web::resource("/address/{put_code}")
            .route(web::put().to(update_address))
            .route(web::delete().to(delete_address)),
    );
}

/// Addresses of a profile: `{"address":[...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressList {
    #[serde(rename = "address", default)]
    pub addresses: Vec<Address>,
}

/// Full address list submitted by the UI
#[derive(Debug, Clone, Deserialize)]
struct AddressSync {
    #[serde(rename = "address", default)]
    addresses: Vec<AddressCandidate>,
}

async fn list_addresses(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let addresses = state.registry.addresses().get_addresses(&path).await?;
    Format::accepted(&req).respond(StatusCode::OK, "addresses", &AddressList { addresses })
}

async fn sync_addresses(
    state: web::Data<AppState>,
    path: web::Path<String>,
    caller: Caller,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let sync: AddressSync = Format::of_request(&req).decode(&body)?;
    let addresses = state
        .registry
        .addresses()
        .update_addresses(&path, &caller, sync.addresses)
        .await?;
    Format::accepted(&req).respond(StatusCode::OK, "addresses", &AddressList { addresses })
}

async fn create_address(
    state: web::Data<AppState>,
    path: web::Path<String>,
    caller: Caller,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let orcid = path.into_inner();
    let candidate: AddressCandidate = Format::of_request(&req).decode(&body)?;

    let address = state
        .registry
        .addresses()
        .create_address(&orcid, &caller, candidate)
        .await?;

    let location = format!("/v3/{}/address/{}", orcid, address.put_code);
    created(&req, "address", &address, location)
}

async fn update_address(
    state: web::Data<AppState>,
    path: web::Path<(String, i64)>,
    caller: Caller,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let (orcid, put_code) = path.into_inner();
    let candidate: AddressCandidate = Format::of_request(&req).decode(&body)?;

    let address = state
        .registry
        .addresses()
        .update_address(&orcid, &caller, put_code, candidate)
        .await?;
    Format::accepted(&req).respond(StatusCode::OK, "address", &address)
}

async fn delete_address(
    state: web::Data<AppState>,
    path: web::Path<(String, i64)>,
    caller: Caller,
) -> Result<HttpResponse> {
    let (orcid, put_code) = path.into_inner();
    let deleted = state
        .registry
        .addresses()
        .delete_address(&orcid, &caller, put_code)
        .await?;

    if deleted {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(OrcidError::not_found(format!("address {}", put_code)).into())
    }
}
