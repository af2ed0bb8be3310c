//! JSON and XML body negotiation
//!
//! JSON is the default. A request whose `Content-Type` mentions `xml` is read
//! as XML, and a response is written as XML when `Accept` mentions `xml` (or,
//! without an `Accept` preference, when the request body was XML).

use crate::utils::error::{RegistryError, Result};
use actix_web::http::StatusCode;
use actix_web::http::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;

const JSON_CONTENT_TYPE: &str = "application/json";
const XML_CONTENT_TYPE: &str = "application/xml";

/// Wire format of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    /// Format of the request body
    pub fn of_request(req: &HttpRequest) -> Self {
        Self::from_header(req.headers(), CONTENT_TYPE.as_str()).unwrap_or_default()
    }

    /// Format the caller wants back
    pub fn accepted(req: &HttpRequest) -> Self {
        Self::from_header(req.headers(), ACCEPT.as_str())
            .unwrap_or_else(|| Self::of_request(req))
    }

    fn from_header(headers: &HeaderMap, name: &str) -> Option<Self> {
        let value = headers.get(name)?.to_str().ok()?.to_ascii_lowercase();
        if value.contains("xml") {
            Some(Self::Xml)
        } else if value.contains("json") {
            Some(Self::Json)
        } else {
            None
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => JSON_CONTENT_TYPE,
            Self::Xml => XML_CONTENT_TYPE,
        }
    }

    /// Decode a body
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T> {
        match self {
            Self::Json => Ok(serde_json::from_slice(body)?),
            Self::Xml => {
                let text = std::str::from_utf8(body)
                    .map_err(|e| RegistryError::xml(format!("Body is not UTF-8: {}", e)))?;
                Ok(quick_xml::de::from_str(text)?)
            }
        }
    }

    /// Encode a value; `root` names the XML document element
    pub fn encode<T: Serialize>(&self, root: &str, value: &T) -> Result<String> {
        match self {
            Self::Json => Ok(serde_json::to_string(value)?),
            Self::Xml => quick_xml::se::to_string_with_root(root, value)
                .map_err(|e| RegistryError::xml(e.to_string())),
        }
    }

    /// Build a response carrying an encoded value
    pub fn respond<T: Serialize>(
        &self,
        status: StatusCode,
        root: &str,
        value: &T,
    ) -> Result<HttpResponse> {
        let body = self.encode(root, value)?;
        Ok(HttpResponse::build(status)
            .content_type(self.content_type())
            .body(body))
    }
}
