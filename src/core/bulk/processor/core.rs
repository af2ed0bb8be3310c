//! Core BulkWorkProcessor struct and public API

use super::super::types::{BulkInput, MAX_BULK_SIZE, WorkBulk};
use crate::core::models::WorkCandidate;
use crate::core::source::Caller;
use crate::core::works::WorkManager;
use crate::utils::error::Result;
use crate::utils::logging::log_bulk_summary;
use std::sync::Arc;
use tracing::info;

/// Processes bulk work requests
#[derive(Clone)]
pub struct BulkWorkProcessor {
    pub(super) works: Arc<WorkManager>,
    pub(super) max_batch_size: usize,
}

impl BulkWorkProcessor {
    /// Create a processor accepting at most [`MAX_BULK_SIZE`] items
    pub fn new(works: Arc<WorkManager>) -> Self {
        Self::with_max_batch_size(works, MAX_BULK_SIZE)
    }

    /// Create a processor with a lower item limit; values above
    /// [`MAX_BULK_SIZE`] are clamped
    pub fn with_max_batch_size(works: Arc<WorkManager>, max_batch_size: usize) -> Self {
        Self {
            works,
            max_batch_size: max_batch_size.clamp(1, MAX_BULK_SIZE),
        }
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Process a bulk request for one profile.
    ///
    /// Whole-batch problems (too many items, unknown profile) fail the call
    /// before any item is processed. Otherwise the result has exactly one
    /// element per input item, in input order.
    pub async fn process_batch(
        &self,
        orcid: &str,
        caller: &Caller,
        items: Vec<WorkCandidate>,
    ) -> Result<WorkBulk> {
        self.process_items(orcid, caller, items.into_iter().map(Ok).collect())
            .await
    }

    /// Like [`process_batch`](Self::process_batch), for items decoded one by
    /// one; an item that failed to decode keeps its error in its slot
    pub async fn process_items(
        &self,
        orcid: &str,
        caller: &Caller,
        items: Vec<BulkInput>,
    ) -> Result<WorkBulk> {
        info!("Processing bulk request of {} works for {}", items.len(), orcid);

        self.validate_batch(items.len())?;

        let received = items.len();
        let bulk = self.execute_batch(orcid, caller, items).await?;

        log_bulk_summary(
            orcid,
            caller.source_id(),
            received,
            bulk.created_count(),
            bulk.error_count(),
        );
        Ok(bulk)
    }
}
