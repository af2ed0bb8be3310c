//! Registry error codes and the structured error object
//!
//! Numeric codes are part of the public contract: clients switch on them, so
//! a variant's code never changes once released.

use actix_web::http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Stable numeric error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrcidErrorCode {
    /// Request body could not be parsed
    MalformedRequest,
    /// Too many elements in a single bulk request
    BulkTooLarge,
    /// The store failed to persist or load a record
    Persistence,
    /// Caller is not the source of the record
    WrongSource,
    /// Record or profile does not exist
    NotFound,
    /// An equivalent record already exists under the same source
    Duplicated,
    /// Missing or empty title
    InvalidTitle,
    /// External identifiers are missing or malformed
    InvalidExternalIds,
    /// Put-code present on create or mismatched on update
    InvalidPutCode,
    /// Visibility cannot be changed through an update
    VisibilityMismatch,
    /// Invalid type, translated title or country
    InvalidType,
    /// Email address is registered to another record
    EmailInUse,
    /// Email address is syntactically invalid
    InvalidEmail,
    /// No caller identity on the request
    MissingCaller,
}

impl OrcidErrorCode {
    /// Numeric code sent to clients
    pub fn code(self) -> u16 {
        match self {
            Self::MalformedRequest => 9001,
            Self::BulkTooLarge => 9006,
            Self::Persistence => 9008,
            Self::WrongSource => 9010,
            Self::NotFound => 9016,
            Self::Duplicated => 9021,
            Self::InvalidTitle => 9022,
            Self::InvalidExternalIds => 9023,
            Self::InvalidPutCode => 9034,
            Self::VisibilityMismatch => 9035,
            Self::InvalidType => 9037,
            Self::EmailInUse => 9044,
            Self::InvalidEmail => 9045,
            Self::MissingCaller => 9046,
        }
    }

    /// Look up a code by its numeric value
    pub fn from_code(code: u16) -> Option<Self> {
        let code = match code {
            9001 => Self::MalformedRequest,
            9006 => Self::BulkTooLarge,
            9008 => Self::Persistence,
            9010 => Self::WrongSource,
            9016 => Self::NotFound,
            9021 => Self::Duplicated,
            9022 => Self::InvalidTitle,
            9023 => Self::InvalidExternalIds,
            9034 => Self::InvalidPutCode,
            9035 => Self::VisibilityMismatch,
            9037 => Self::InvalidType,
            9044 => Self::EmailInUse,
            9045 => Self::InvalidEmail,
            9046 => Self::MissingCaller,
            _ => return None,
        };
        Some(code)
    }

    /// HTTP status used when the error is the whole response
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::MalformedRequest
            | Self::BulkTooLarge
            | Self::InvalidTitle
            | Self::InvalidExternalIds
            | Self::InvalidPutCode
            | Self::InvalidType
            | Self::InvalidEmail => StatusCode::BAD_REQUEST,
            Self::MissingCaller => StatusCode::UNAUTHORIZED,
            Self::WrongSource | Self::VisibilityMismatch => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Duplicated | Self::EmailInUse => StatusCode::CONFLICT,
            Self::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for OrcidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for OrcidErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

impl<'de> Deserialize<'de> for OrcidErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error;

        let code = u16::deserialize(deserializer)?;
        Self::from_code(code).ok_or_else(|| D::Error::custom(format!("unknown error code {code}")))
    }
}

/// Structured error returned to clients, either as a whole response or
/// embedded in one slot of a bulk response
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{developer_message}")]
pub struct OrcidError {
    /// Stable error code
    pub error_code: OrcidErrorCode,
    /// Message aimed at the client developer
    pub developer_message: String,
    /// Offending field, when the error is about a single field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl OrcidError {
    pub fn new<S: Into<String>>(error_code: OrcidErrorCode, message: S) -> Self {
        Self {
            error_code,
            developer_message: message.into(),
            field: None,
        }
    }

    /// Attach the offending field reference
    pub fn with_field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Numeric code
    pub fn code(&self) -> u16 {
        self.error_code.code()
    }

    pub fn malformed_request<S: Into<String>>(message: S) -> Self {
        Self::new(OrcidErrorCode::MalformedRequest, message)
    }

    pub fn bulk_too_large(received: usize, max: usize) -> Self {
        Self::new(
            OrcidErrorCode::BulkTooLarge,
            format!(
                "Exceeded the maximum number of elements in a bulk request: received {received}, max {max}"
            ),
        )
    }

    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::new(
            OrcidErrorCode::Persistence,
            format!("Unable to persist record: {}", message.into()),
        )
    }

    pub fn wrong_source() -> Self {
        Self::new(
            OrcidErrorCode::WrongSource,
            "The caller is not the source of the record it is trying to modify",
        )
    }

    pub fn not_found<S: Into<String>>(what: S) -> Self {
        Self::new(OrcidErrorCode::NotFound, format!("Not found: {}", what.into()))
    }

    /// Duplicated element; `kind` is the record type, `value` the clashing key
    pub fn duplicated(kind: &str, value: &str) -> Self {
        Self::new(
            OrcidErrorCode::Duplicated,
            format!("An element of type {kind} with value {value} already exists for this source"),
        )
    }

    pub fn invalid_title() -> Self {
        Self::new(OrcidErrorCode::InvalidTitle, "Title is required and cannot be empty")
            .with_field("title")
    }

    pub fn invalid_external_ids<S: Into<String>>(message: S) -> Self {
        Self::new(
            OrcidErrorCode::InvalidExternalIds,
            format!("Invalid external identifiers: {}", message.into()),
        )
        .with_field("external-ids")
    }

    pub fn invalid_put_code<S: Into<String>>(message: S) -> Self {
        Self::new(
            OrcidErrorCode::InvalidPutCode,
            format!("Invalid put-code: {}", message.into()),
        )
        .with_field("put-code")
    }

    pub fn visibility_mismatch() -> Self {
        Self::new(
            OrcidErrorCode::VisibilityMismatch,
            "The visibility of an existing element cannot be changed through an update",
        )
        .with_field("visibility")
    }

    pub fn invalid_work_type(value: Option<&str>) -> Self {
        let message = match value {
            Some(value) => format!("Invalid work type: '{value}' is not a recognized work type"),
            None => "Invalid work type: the work type is required".to_string(),
        };
        Self::new(OrcidErrorCode::InvalidType, message).with_field("type")
    }

    pub fn invalid_translated_title() -> Self {
        Self::new(
            OrcidErrorCode::InvalidType,
            "Invalid translated title: a language code is required",
        )
        .with_field("translated-title")
    }

    pub fn invalid_country(value: &str) -> Self {
        Self::new(
            OrcidErrorCode::InvalidType,
            format!("Invalid country: '{value}' is not an ISO 3166 alpha-2 code"),
        )
        .with_field("country")
    }

    pub fn email_in_use(email: &str) -> Self {
        Self::new(
            OrcidErrorCode::EmailInUse,
            format!("Email {email} belongs to another record"),
        )
        .with_field("email")
    }

    pub fn invalid_email(email: &str) -> Self {
        Self::new(
            OrcidErrorCode::InvalidEmail,
            format!("Invalid email address: '{email}'"),
        )
        .with_field("email")
    }

    pub fn missing_caller() -> Self {
        Self::new(
            OrcidErrorCode::MissingCaller,
            "A source ORCID iD or client id is required",
        )
    }
}
