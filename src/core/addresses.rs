//! Address manager
//!
//! Addresses follow the same source and visibility rules as works, with two
//! differences: duplicates are keyed on the country, and callers acting
//! through the UI may change visibility and edit records they did not create.

use crate::core::locks::OwnerLocks;
use crate::core::models::{Address, AddressCandidate, Visibility};
use crate::core::source::Caller;
use crate::core::validation::validate_country;
use crate::storage::database::{Database, NewAddress};
use crate::utils::error::{OrcidError, Result};
use crate::utils::logging::log_record_operation;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Manages the addresses of a profile
#[derive(Clone)]
pub struct AddressManager {
    db: Arc<Database>,
    locks: Arc<OwnerLocks>,
}

impl AddressManager {
    pub fn new(db: Arc<Database>, locks: Arc<OwnerLocks>) -> Self {
        Self { db, locks }
    }

    /// All addresses of a profile, highest display index first
    pub async fn get_addresses(&self, orcid: &str) -> Result<Vec<Address>> {
        self.db.require_profile(orcid).await?;
        self.db.find_addresses(orcid).await
    }

    /// Create an address
    pub async fn create_address(
        &self,
        orcid: &str,
        caller: &Caller,
        candidate: AddressCandidate,
    ) -> Result<Address> {
        if candidate.put_code.is_some() {
            return Err(
                OrcidError::invalid_put_code("a new address cannot carry a put-code").into(),
            );
        }
        validate_country(&candidate.country)?;

        let _guard = self.locks.lock(orcid).await;
        self.create_locked(orcid, caller, candidate, None).await
    }

    /// Update an address in place
    pub async fn update_address(
        &self,
        orcid: &str,
        caller: &Caller,
        put_code: i64,
        candidate: AddressCandidate,
    ) -> Result<Address> {
        if candidate.put_code.is_some_and(|code| code != put_code) {
            return Err(OrcidError::invalid_put_code(format!(
                "put-code in body does not match put-code {} in path",
                put_code
            ))
            .into());
        }
        validate_country(&candidate.country)?;

        let _guard = self.locks.lock(orcid).await;

        let mut address = self
            .db
            .find_address(orcid, put_code)
            .await?
            .ok_or_else(|| OrcidError::not_found(format!("address {}", put_code)))?;

        if caller.is_api() {
            if !caller.is_source_of(&address.source) {
                return Err(OrcidError::wrong_source().into());
            }
            if candidate
                .visibility
                .is_some_and(|visibility| visibility != address.visibility)
            {
                return Err(OrcidError::visibility_mismatch().into());
            }
        }

        let existing = self.db.find_addresses(orcid).await?;
        if is_duplicate(&existing, caller, &candidate.country, Some(put_code)) {
            return Err(OrcidError::duplicated("address", &candidate.country).into());
        }

        address.country = candidate.country;
        if let Some(visibility) = candidate.visibility {
            address.visibility = visibility;
        }
        let updated = self.db.save_address(&address).await?;

        log_record_operation("update", orcid, "address", Some(put_code), caller.source_id(), "ok");
        Ok(updated)
    }

    /// Delete an address; `false` when nothing was removed
    pub async fn delete_address(&self, orcid: &str, caller: &Caller, put_code: i64) -> Result<bool> {
        let _guard = self.locks.lock(orcid).await;

        let Some(address) = self.db.find_address(orcid, put_code).await? else {
            return Ok(false);
        };
        if caller.is_api() && !caller.is_source_of(&address.source) {
            return Err(OrcidError::wrong_source().into());
        }

        let deleted = self.db.remove_address(orcid, put_code).await?;
        if deleted {
            log_record_operation("delete", orcid, "address", Some(put_code), caller.source_id(), "ok");
        }
        Ok(deleted)
    }

    /// Synchronize the full address list edited in the UI.
    ///
    /// Stored addresses missing from `candidates` are deleted, entries with a
    /// put-code are rewritten, and the rest are created. Every entry is
    /// checked before anything is written, and the writes share one
    /// transaction.
    pub async fn update_addresses(
        &self,
        orcid: &str,
        caller: &Caller,
        candidates: Vec<AddressCandidate>,
    ) -> Result<Vec<Address>> {
        for candidate in &candidates {
            validate_country(&candidate.country)?;
        }

        let _guard = self.locks.lock(orcid).await;
        let profile = self.db.require_profile(orcid).await?;

        let existing = self.db.find_addresses(orcid).await?;
        let kept: HashSet<i64> = candidates.iter().filter_map(|c| c.put_code).collect();

        let mut updated = Vec::new();
        let mut created = Vec::new();
        for candidate in candidates {
            match candidate.put_code {
                Some(put_code) => {
                    let Some(mut address) = existing.iter().find(|a| a.put_code == put_code).cloned()
                    else {
                        return Err(OrcidError::not_found(format!("address {}", put_code)).into());
                    };
                    address.country = candidate.country;
                    if let Some(visibility) = candidate.visibility {
                        address.visibility = visibility;
                    }
                    if let Some(display_index) = candidate.display_index {
                        address.display_index = display_index;
                    }
                    updated.push(address);
                }
                None => {
                    let repeated = created
                        .iter()
                        .any(|new: &NewAddress| new.country == candidate.country);
                    if repeated || is_duplicate(&updated, caller, &candidate.country, None) {
                        return Err(OrcidError::duplicated("address", &candidate.country).into());
                    }
                    created.push(NewAddress {
                        visibility: Visibility::for_new_record(
                            profile.claimed,
                            profile.default_visibility,
                            candidate.visibility,
                        ),
                        country: candidate.country,
                        source: caller.source.clone(),
                        display_index: candidate.display_index,
                    });
                }
            }
        }

        let removed: Vec<i64> = existing
            .iter()
            .map(|address| address.put_code)
            .filter(|put_code| !kept.contains(put_code))
            .collect();
        debug!("Removing {} addresses absent from UI edit", removed.len());

        let addresses = self
            .db
            .sync_addresses(orcid, &removed, &updated, created)
            .await?;

        log_record_operation("sync", orcid, "address", None, caller.source_id(), "ok");
        Ok(addresses)
    }

    async fn create_locked(
        &self,
        orcid: &str,
        caller: &Caller,
        candidate: AddressCandidate,
        display_index: Option<i64>,
    ) -> Result<Address> {
        let profile = self.db.require_profile(orcid).await?;

        let existing = self.db.find_addresses(orcid).await?;
        if is_duplicate(&existing, caller, &candidate.country, None) {
            return Err(OrcidError::duplicated("address", &candidate.country).into());
        }

        let new_address = NewAddress {
            country: candidate.country,
            visibility: Visibility::for_new_record(
                profile.claimed,
                profile.default_visibility,
                candidate.visibility,
            ),
            source: caller.source.clone(),
            display_index,
        };
        let address = self.db.create_address(orcid, new_address).await?;

        log_record_operation(
            "create",
            orcid,
            "address",
            Some(address.put_code),
            caller.source_id(),
            "ok",
        );
        Ok(address)
    }
}

/// Same caller source and same country, ignoring `exclude`
fn is_duplicate(existing: &[Address], caller: &Caller, country: &str, exclude: Option<i64>) -> bool {
    existing.iter().any(|address| {
        Some(address.put_code) != exclude
            && address.country == country
            && caller.is_source_of(&address.source)
    })
}
