//! Work routes, including the bulk endpoint

use crate::core::bulk::{BulkElement, BulkInput};
use crate::core::models::{Work, WorkCandidate};
use crate::core::source::Caller;
use crate::server::negotiation::Format;
use crate::server::routes::created;
use crate::server::state::AppState;
use crate::utils::error::{OrcidError, RegistryError, Result};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configure work routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/works")
            .route(web::post().to(post_works))
            .route(web::get().to(list_works)),
    )
    .service(web::resource("/work").route(web::post().to(create_work)))
    .service(
        web::resource("/work/{put_code}")
            .route(web::get().to(get_work))
            .route(web::put().to(update_work))
            .route(web::delete().to(delete_work)),
    );
}

/// One item of a bulk request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkItem {
    Work(WorkCandidate),
}

impl From<BulkItem> for WorkCandidate {
    fn from(item: BulkItem) -> Self {
        match item {
            BulkItem::Work(candidate) => candidate,
        }
    }
}

/// JSON bulk request: `{"bulk":[{"work":{...}}, ...]}`.
///
/// Items stay raw so each one is decoded on its own.
#[derive(Debug, Deserialize)]
struct RawBulkRequest {
    #[serde(default)]
    bulk: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct XmlBulkResponse<'a> {
    #[serde(rename = "$value")]
    items: &'a [BulkElement],
}

/// Works of a profile: `{"work":[...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkList {
    #[serde(rename = "work", default)]
    pub works: Vec<Work>,
}

/// Decode a bulk body into one input per item.
///
/// A body that cannot be read as a bulk document fails as a whole; an item
/// that cannot be read as a work becomes a malformed-request error in its
/// own slot.
fn decode_bulk(format: Format, body: &[u8]) -> Result<Vec<BulkInput>> {
    match format {
        Format::Json => {
            let request: RawBulkRequest = format.decode(body)?;
            Ok(request.bulk.into_iter().map(decode_json_item).collect())
        }
        Format::Xml => {
            let text = std::str::from_utf8(body)
                .map_err(|e| RegistryError::xml(format!("Body is not UTF-8: {}", e)))?;
            Ok(split_xml_items(text)?
                .into_iter()
                .map(|(name, item)| decode_xml_item(&name, item))
                .collect())
        }
    }
}

fn decode_json_item(value: serde_json::Value) -> BulkInput {
    serde_json::from_value::<BulkItem>(value)
        .map(WorkCandidate::from)
        .map_err(|e| OrcidError::malformed_request(format!("Invalid bulk item: {}", e)))
}

fn decode_xml_item(name: &str, item: &str) -> BulkInput {
    if name != "work" {
        return Err(OrcidError::malformed_request(format!(
            "Invalid bulk item: unsupported element <{}>",
            name
        )));
    }
    quick_xml::de::from_str::<WorkCandidate>(item)
        .map_err(|e| OrcidError::malformed_request(format!("Invalid bulk item: {}", e)))
}

/// Children of the document element, as (local name, raw element text)
fn split_xml_items(text: &str) -> Result<Vec<(String, &str)>> {
    let mut reader = Reader::from_str(text);
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut open: Option<(String, usize)> = None;

    loop {
        let before = position(&reader);
        let event = reader
            .read_event()
            .map_err(|e| RegistryError::xml(e.to_string()))?;
        match event {
            Event::Start(element) => {
                depth += 1;
                if depth == 2 {
                    open = Some((local_name(element.local_name().as_ref()), before));
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some((name, start)) = open.take() {
                        items.push((name, &text[start..position(&reader)]));
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Empty(element) if depth == 1 => {
                let name = local_name(element.local_name().as_ref());
                items.push((name, &text[before..position(&reader)]));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(items)
}

fn position(reader: &Reader<&[u8]>) -> usize {
    usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX)
}

fn local_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

/// Create or update up to the configured limit of works in one call
async fn post_works(
    state: web::Data<AppState>,
    path: web::Path<String>,
    caller: Caller,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let orcid = path.into_inner();
    let items = decode_bulk(Format::of_request(&req), &body)?;
    debug!("Bulk request with {} items for {}", items.len(), orcid);

    let bulk = state
        .registry
        .bulk()
        .process_items(&orcid, &caller, items)
        .await?;

    let format = Format::accepted(&req);
    match format {
        Format::Json => format.respond(StatusCode::OK, "bulk", &bulk),
        Format::Xml => format.respond(
            StatusCode::OK,
            "bulk",
            &XmlBulkResponse { items: &bulk.bulk },
        ),
    }
}

async fn list_works(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let works = state.registry.works().list_works(&path).await?;
    Format::accepted(&req).respond(StatusCode::OK, "works", &WorkList { works })
}

async fn create_work(
    state: web::Data<AppState>,
    path: web::Path<String>,
    caller: Caller,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let orcid = path.into_inner();
    let candidate: WorkCandidate = Format::of_request(&req).decode(&body)?;

    let work = state
        .registry
        .works()
        .create_work(&orcid, &caller, candidate)
        .await?;

    let location = format!("/v3/{}/work/{}", orcid, work.put_code);
    created(&req, "work", &work, location)
}

async fn get_work(
    state: web::Data<AppState>,
    path: web::Path<(String, i64)>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let (orcid, put_code) = path.into_inner();
    let work = state.registry.works().get_work(&orcid, put_code).await?;
    Format::accepted(&req).respond(StatusCode::OK, "work", &work)
}

async fn update_work(
    state: web::Data<AppState>,
    path: web::Path<(String, i64)>,
    caller: Caller,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let (orcid, put_code) = path.into_inner();
    let candidate: WorkCandidate = Format::of_request(&req).decode(&body)?;

    let work = state
        .registry
        .works()
        .update_work(&orcid, &caller, put_code, candidate)
        .await?;
    Format::accepted(&req).respond(StatusCode::OK, "work", &work)
}

async fn delete_work(
    state: web::Data<AppState>,
    path: web::Path<(String, i64)>,
    caller: Caller,
) -> Result<HttpResponse> {
    let (orcid, put_code) = path.into_inner();
    state
        .registry
        .works()
        .delete_work(&orcid, &caller, put_code)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
