//! Per-item execution

use super::super::types::{BulkElement, BulkInput, WorkBulk};
use super::core::BulkWorkProcessor;
use crate::core::models::{Profile, WorkCandidate};
use crate::core::source::Caller;
use crate::core::works::DuplicateIndex;
use crate::utils::error::Result;
use tracing::{debug, warn};

impl BulkWorkProcessor {
    /// Run every item under the owner lock, collecting one element per item
    pub(super) async fn execute_batch(
        &self,
        orcid: &str,
        caller: &Caller,
        items: Vec<BulkInput>,
    ) -> Result<WorkBulk> {
        let _guard = self.works.locks().lock(orcid).await;

        let profile = self.works.require_profile(orcid).await?;
        let existing = self.works.store().list_works(orcid).await?;
        let mut index = DuplicateIndex::for_caller(&existing, caller);

        let mut elements = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            let element = match item {
                Ok(candidate) => {
                    self.process_item(&profile, caller, candidate, &mut index)
                        .await
                }
                Err(error) => BulkElement::Error(error),
            };

            if let BulkElement::Error(error) = &element {
                debug!(
                    "Bulk item {} for {} rejected with {}: {}",
                    position,
                    orcid,
                    error.code(),
                    error.developer_message
                );
            }
            elements.push(element);
        }

        Ok(WorkBulk::from(elements))
    }

    /// Create or update one item; any failure stays in its own slot
    async fn process_item(
        &self,
        profile: &Profile,
        caller: &Caller,
        item: WorkCandidate,
        index: &mut DuplicateIndex,
    ) -> BulkElement {
        let result = match item.put_code {
            Some(put_code) => {
                self.works
                    .update_locked(&profile.orcid, caller, put_code, item, index)
                    .await
            }
            None => self.works.create_locked(profile, caller, item, index).await,
        };

        match result {
            Ok(work) => BulkElement::Work(work),
            Err(error) => {
                if error.orcid_code().is_none() {
                    warn!("Bulk item for {} failed to persist: {}", profile.orcid, error);
                }
                BulkElement::Error(error.into_orcid_error())
            }
        }
    }
}
