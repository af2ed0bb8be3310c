//! Bulk processing types

use crate::core::models::{Work, WorkCandidate};
use crate::utils::error::OrcidError;
use serde::{Deserialize, Serialize};

/// Hard upper bound on the number of items in one bulk request
pub const MAX_BULK_SIZE: usize = 1000;

/// One decoded bulk item, or the error that kept it from decoding
pub type BulkInput = std::result::Result<WorkCandidate, OrcidError>;

/// Outcome of one bulk item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkElement {
    /// The item was persisted
    Work(Work),
    /// The item was rejected or failed to persist
    Error(OrcidError),
}

impl BulkElement {
    pub fn is_work(&self) -> bool {
        matches!(self, Self::Work(_))
    }

    pub fn as_work(&self) -> Option<&Work> {
        match self {
            Self::Work(work) => Some(work),
            Self::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&OrcidError> {
        match self {
            Self::Work(_) => None,
            Self::Error(error) => Some(error),
        }
    }
}

/// Ordered bulk response; element `i` answers input item `i`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkBulk {
    pub bulk: Vec<BulkElement>,
}

impl WorkBulk {
    pub fn len(&self) -> usize {
        self.bulk.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bulk.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BulkElement> {
        self.bulk.get(index)
    }

    pub fn works(&self) -> impl Iterator<Item = &Work> {
        self.bulk.iter().filter_map(BulkElement::as_work)
    }

    pub fn errors(&self) -> impl Iterator<Item = &OrcidError> {
        self.bulk.iter().filter_map(BulkElement::as_error)
    }

    pub fn created_count(&self) -> usize {
        self.works().count()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

impl From<Vec<BulkElement>> for WorkBulk {
    fn from(bulk: Vec<BulkElement>) -> Self {
        Self { bulk }
    }
}
