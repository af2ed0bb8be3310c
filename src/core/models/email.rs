//! Email records

use super::visibility::Visibility;
use crate::core::source::SourceIdentity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An email address as submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmailCandidate {
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub primary: bool,
    #[serde(default = "default_current")]
    pub current: bool,
}

fn default_current() -> bool {
    true
}

impl EmailCandidate {
    pub fn new<S: Into<String>>(email: S) -> Self {
        Self {
            email: email.into(),
            visibility: None,
            primary: false,
            current: true,
        }
    }
}

/// A persisted email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Email {
    pub email: String,
    /// SHA-256 of the normalized address
    #[serde(skip)]
    pub hash: String,
    pub path: String,
    pub primary: bool,
    pub current: bool,
    pub verified: bool,
    pub visibility: Visibility,
    pub source: SourceIdentity,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}
