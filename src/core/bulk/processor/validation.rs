//! Whole-batch validation

use super::core::BulkWorkProcessor;
use crate::utils::error::{OrcidError, Result};

impl BulkWorkProcessor {
    /// Reject batches that exceed the item limit
    pub(super) fn validate_batch(&self, received: usize) -> Result<()> {
        if received > self.max_batch_size {
            return Err(OrcidError::bulk_too_large(received, self.max_batch_size).into());
        }
        Ok(())
    }
}
