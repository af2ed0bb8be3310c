//! Owner profile

use super::visibility::Visibility;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The record that owns works, addresses and emails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Profile {
    pub orcid: String,
    /// Whether the researcher has claimed the record
    pub claimed: bool,
    /// Visibility imposed on new activities of a claimed record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_visibility: Option<Visibility>,
    /// Last display index handed out
    #[serde(skip)]
    pub display_index_counter: i64,
    pub last_modified_date: DateTime<Utc>,
}
