//! Address records

use super::visibility::Visibility;
use crate::core::source::SourceIdentity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An address as submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AddressCandidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put_code: Option<i64>,
    /// ISO 3166 alpha-2 country code
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Only honored by the UI sync operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_index: Option<i64>,
}

impl AddressCandidate {
    pub fn new<S: Into<String>>(country: S) -> Self {
        Self {
            country: country.into(),
            ..Default::default()
        }
    }
}

/// A persisted address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Address {
    pub put_code: i64,
    pub path: String,
    pub country: String,
    pub visibility: Visibility,
    pub display_index: i64,
    pub source: SourceIdentity,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}
