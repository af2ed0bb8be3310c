//! Caller identity threaded through every mutating operation

use serde::{Deserialize, Serialize};

/// Who created a record, or who is acting on one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceIdentity {
    /// ORCID iD of a person acting as source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_orcid: Option<String>,
    /// Client application id acting as source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_client_id: Option<String>,
}

impl SourceIdentity {
    pub fn orcid<S: Into<String>>(orcid: S) -> Self {
        Self {
            source_orcid: Some(orcid.into()),
            source_client_id: None,
        }
    }

    pub fn client<S: Into<String>>(client_id: S) -> Self {
        Self {
            source_orcid: None,
            source_client_id: Some(client_id.into()),
        }
    }

    /// Identifier used for source comparisons; the client id wins when both are set
    pub fn source_id(&self) -> Option<&str> {
        self.source_client_id
            .as_deref()
            .or(self.source_orcid.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.source_id().is_none()
    }

    /// Whether `other` names the same source
    pub fn matches(&self, other: &SourceIdentity) -> bool {
        match (self.source_id(), other.source_id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Where a request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Member API
    #[default]
    Api,
    /// Registry user interface
    Ui,
}

/// Identity of the party invoking an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub source: SourceIdentity,
    pub origin: Origin,
}

impl Caller {
    pub fn api(source: SourceIdentity) -> Self {
        Self {
            source,
            origin: Origin::Api,
        }
    }

    pub fn ui(source: SourceIdentity) -> Self {
        Self {
            source,
            origin: Origin::Ui,
        }
    }

    pub fn is_api(&self) -> bool {
        self.origin == Origin::Api
    }

    /// Identifier recorded as the source of records this caller creates
    pub fn source_id(&self) -> &str {
        self.source.source_id().unwrap_or_default()
    }

    /// Whether this caller is the source of a record
    pub fn is_source_of(&self, record_source: &SourceIdentity) -> bool {
        self.source.matches(record_source)
    }
}
