//! Work manager

use super::duplicates::DuplicateIndex;
use crate::core::locks::OwnerLocks;
use crate::core::models::{NewWork, Profile, Visibility, Work, WorkCandidate};
use crate::core::source::Caller;
use crate::core::validation::validate_work;
use crate::storage::WorkStore;
use crate::utils::error::{OrcidError, Result};
use crate::utils::logging::log_record_operation;
use std::sync::Arc;
use tracing::debug;

/// Create, read, update and delete works of a profile
#[derive(Clone)]
pub struct WorkManager {
    store: Arc<dyn WorkStore>,
    locks: Arc<OwnerLocks>,
}

impl WorkManager {
    pub fn new(store: Arc<dyn WorkStore>, locks: Arc<OwnerLocks>) -> Self {
        Self { store, locks }
    }

    pub(crate) fn store(&self) -> &Arc<dyn WorkStore> {
        &self.store
    }

    pub(crate) fn locks(&self) -> &Arc<OwnerLocks> {
        &self.locks
    }

    /// Create one work
    pub async fn create_work(
        &self,
        orcid: &str,
        caller: &Caller,
        candidate: WorkCandidate,
    ) -> Result<Work> {
        if candidate.put_code.is_some() {
            return Err(OrcidError::invalid_put_code("a new work cannot carry a put-code").into());
        }

        let _guard = self.locks.lock(orcid).await;
        let profile = self.require_profile(orcid).await?;
        let existing = self.store.list_works(orcid).await?;
        let mut index = DuplicateIndex::for_caller(&existing, caller);

        self.create_locked(&profile, caller, candidate, &mut index)
            .await
    }

    /// Get one work
    pub async fn get_work(&self, orcid: &str, put_code: i64) -> Result<Work> {
        self.store
            .load_work(orcid, put_code)
            .await?
            .ok_or_else(|| OrcidError::not_found(format!("work {}", put_code)).into())
    }

    /// All works of a profile, highest display index first, then newest first
    pub async fn list_works(&self, orcid: &str) -> Result<Vec<Work>> {
        self.require_profile(orcid).await?;
        self.store.list_works(orcid).await
    }

    /// Update one work in place
    pub async fn update_work(
        &self,
        orcid: &str,
        caller: &Caller,
        put_code: i64,
        candidate: WorkCandidate,
    ) -> Result<Work> {
        if candidate.put_code.is_some_and(|code| code != put_code) {
            return Err(OrcidError::invalid_put_code(format!(
                "put-code in body does not match put-code {} in path",
                put_code
            ))
            .into());
        }

        let _guard = self.locks.lock(orcid).await;
        let existing = self.store.list_works(orcid).await?;
        let mut index = DuplicateIndex::for_caller(&existing, caller);

        self.update_locked(orcid, caller, put_code, candidate, &mut index)
            .await
    }

    /// Delete one work
    pub async fn delete_work(&self, orcid: &str, caller: &Caller, put_code: i64) -> Result<()> {
        let _guard = self.locks.lock(orcid).await;

        let work = self
            .store
            .load_work(orcid, put_code)
            .await?
            .ok_or_else(|| OrcidError::not_found(format!("work {}", put_code)))?;

        if !caller.is_source_of(&work.source) {
            return Err(OrcidError::wrong_source().into());
        }

        if !self.store.delete_work(orcid, put_code).await? {
            return Err(OrcidError::not_found(format!("work {}", put_code)).into());
        }

        log_record_operation("delete", orcid, "work", Some(put_code), caller.source_id(), "ok");
        Ok(())
    }

    pub(crate) async fn require_profile(&self, orcid: &str) -> Result<Profile> {
        self.store
            .load_profile(orcid)
            .await?
            .ok_or_else(|| OrcidError::not_found(format!("profile {}", orcid)).into())
    }

    /// Create a work while the owner lock is held
    pub(crate) async fn create_locked(
        &self,
        profile: &Profile,
        caller: &Caller,
        candidate: WorkCandidate,
        index: &mut DuplicateIndex,
    ) -> Result<Work> {
        let work_type = validate_work(&candidate)?;

        let key = candidate
            .self_key()
            .ok_or_else(|| OrcidError::invalid_external_ids("missing self identifier"))?;
        if index.find(&key, None).is_some() {
            return Err(OrcidError::duplicated("external-id", &key.to_string()).into());
        }

        let visibility = Visibility::for_new_record(
            profile.claimed,
            profile.default_visibility,
            candidate.visibility,
        );
        let new_work = NewWork::from_candidate(candidate, work_type, visibility, caller.source.clone());

        let work = self.store.insert_work(&profile.orcid, new_work).await?;
        index.record(key, work.put_code);

        debug!(
            "Created work {} with display index {}",
            work.put_code, work.display_index
        );
        log_record_operation(
            "create",
            &profile.orcid,
            "work",
            Some(work.put_code),
            caller.source_id(),
            "ok",
        );
        Ok(work)
    }

    /// Update a work while the owner lock is held
    pub(crate) async fn update_locked(
        &self,
        orcid: &str,
        caller: &Caller,
        put_code: i64,
        candidate: WorkCandidate,
        index: &mut DuplicateIndex,
    ) -> Result<Work> {
        let mut work = self
            .store
            .load_work(orcid, put_code)
            .await?
            .ok_or_else(|| OrcidError::not_found(format!("work {}", put_code)))?;

        if !caller.is_source_of(&work.source) {
            return Err(OrcidError::wrong_source().into());
        }

        let work_type = validate_work(&candidate)?;

        if candidate
            .visibility
            .is_some_and(|visibility| visibility != work.visibility)
        {
            return Err(OrcidError::visibility_mismatch().into());
        }

        let key = candidate
            .self_key()
            .ok_or_else(|| OrcidError::invalid_external_ids("missing self identifier"))?;
        if index.find(&key, Some(put_code)).is_some() {
            return Err(OrcidError::duplicated("external-id", &key.to_string()).into());
        }

        let previous_key = work.self_key();
        work.merge_from(work_type, candidate);
        let updated = self.store.update_work(&work).await?;

        if let Some(previous_key) = previous_key {
            index.forget(&previous_key, put_code);
        }
        index.record(key, put_code);

        log_record_operation("update", orcid, "work", Some(put_code), caller.source_id(), "ok");
        Ok(updated)
    }
}
