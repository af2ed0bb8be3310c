//! Email manager
//!
//! Emails are keyed by the SHA-256 hash of their normalized address, which
//! makes an address unique across the whole registry.

use crate::core::models::{Email, EmailCandidate, Visibility};
use crate::core::notifications::Notifier;
use crate::core::source::{Caller, SourceIdentity};
use crate::core::validation::validate_email_address;
use crate::storage::database::Database;
use crate::utils::error::{OrcidError, Result};
use crate::utils::logging::log_record_operation;
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Lower-case hex SHA-256 of the trimmed, lower-cased address
pub fn email_hash(address: &str) -> String {
    let normalized = address.trim().to_lowercase();
    hex::encode(Sha256::digest(normalized.as_bytes()))
}

/// Manages the email addresses of profiles
#[derive(Clone)]
pub struct EmailManager {
    db: Arc<Database>,
    notifier: Arc<dyn Notifier>,
}

impl EmailManager {
    pub fn new(db: Arc<Database>, notifier: Arc<dyn Notifier>) -> Self {
        Self { db, notifier }
    }

    /// Add an address to a profile and ask the owner to verify it
    pub async fn add_email(
        &self,
        orcid: &str,
        caller: &Caller,
        candidate: EmailCandidate,
    ) -> Result<Email> {
        validate_email_address(&candidate.email)?;
        let profile = self.db.require_profile(orcid).await?;

        let address = candidate.email.trim().to_string();
        let hash = email_hash(&address);
        if let Some(existing) = self.db.find_email_by_hash(&hash).await? {
            let error = if existing.path == orcid {
                OrcidError::duplicated("email", &address)
            } else {
                OrcidError::email_in_use(&address)
            };
            return Err(error.into());
        }

        let now = Utc::now();
        let email = Email {
            email: address,
            hash,
            path: orcid.to_string(),
            primary: candidate.primary,
            current: candidate.current,
            verified: false,
            visibility: Visibility::for_new_record(
                profile.claimed,
                profile.default_visibility,
                candidate.visibility,
            ),
            source: caller.source.clone(),
            created_date: now,
            last_modified_date: now,
        };
        let email = self.db.create_email(&email).await?;
        if email.primary {
            self.db.clear_other_primary_emails(orcid, &email.hash).await?;
        }

        log_record_operation("create", orcid, "email", None, caller.source_id(), "ok");
        self.notify_verification(orcid, &email.email).await;
        Ok(email)
    }

    /// Whether any profile holds this address
    pub async fn email_exists(&self, address: &str) -> Result<bool> {
        Ok(self.db.find_email_by_hash(&email_hash(address)).await?.is_some())
    }

    /// All emails of a profile, primary first
    pub async fn get_emails(&self, orcid: &str) -> Result<Vec<Email>> {
        self.db.require_profile(orcid).await?;
        self.db.find_emails(orcid).await
    }

    /// Remove an address from a profile; `false` when it was not there
    pub async fn remove_email(&self, orcid: &str, address: &str) -> Result<bool> {
        let removed = self.db.remove_email(orcid, &email_hash(address)).await?;
        if removed {
            self.db.touch_profile(orcid).await?;
        }
        Ok(removed)
    }

    /// Resolve a comma-separated list of addresses to their owners.
    ///
    /// Keys are the addresses as given (trimmed); unknown addresses are left
    /// out of the map.
    pub async fn find_orcid_ids_by_emails(&self, csv: &str) -> Result<HashMap<String, String>> {
        let by_hash: HashMap<String, String> = csv
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(|address| (email_hash(address), address.to_string()))
            .collect();

        let found = self
            .db
            .find_emails_by_hashes(by_hash.keys().cloned().collect())
            .await?;

        Ok(found
            .into_iter()
            .filter_map(|email| {
                by_hash
                    .get(&email.hash)
                    .map(|address| (address.clone(), email.path))
            })
            .collect())
    }

    /// Reassign an address to another profile; it is never primary there
    pub async fn move_email_to_other_account(
        &self,
        address: &str,
        from: &str,
        to: &str,
    ) -> Result<Email> {
        self.db.require_profile(to).await?;
        let mut email = self.owned_email(from, address).await?;

        email.path = to.to_string();
        email.primary = false;
        let moved = self.db.save_email(&email).await?;
        self.db.touch_profile(to).await?;

        debug!("Moved email from {} to {}", from, to);
        Ok(moved)
    }

    /// Mark an address as verified
    pub async fn verify_email(&self, orcid: &str, address: &str) -> Result<Email> {
        let mut email = self.owned_email(orcid, address).await?;
        email.verified = true;
        self.db.save_email(&email).await
    }

    /// Mark the primary address of a profile as verified
    pub async fn verify_primary_email(&self, orcid: &str) -> Result<Email> {
        let mut email = self.primary_email(orcid).await?;
        email.verified = true;
        self.db.save_email(&email).await
    }

    pub async fn is_primary_email_verified(&self, orcid: &str) -> Result<bool> {
        Ok(self.primary_email(orcid).await?.verified)
    }

    /// Verify an address and make it the current primary one
    pub async fn verify_set_current_and_primary(&self, orcid: &str, address: &str) -> Result<Email> {
        let mut email = self.owned_email(orcid, address).await?;
        email.verified = true;
        email.current = true;
        email.primary = true;

        let email = self.db.save_email(&email).await?;
        self.db.clear_other_primary_emails(orcid, &email.hash).await?;
        Ok(email)
    }

    /// Bring back an address the owner already had, or add it.
    ///
    /// A reactivated address is never primary and takes the given visibility.
    pub async fn reactivate_or_create(
        &self,
        orcid: &str,
        address: &str,
        visibility: Visibility,
    ) -> Result<Email> {
        validate_email_address(address)?;
        self.db.require_profile(orcid).await?;

        let address = address.trim();
        let hash = email_hash(address);
        match self.db.find_email_by_hash(&hash).await? {
            Some(existing) if existing.path != orcid => Err(OrcidError::email_in_use(address).into()),
            Some(mut existing) => {
                existing.primary = false;
                existing.current = true;
                existing.visibility = visibility;
                debug!("Reactivating email for {}", orcid);
                self.db.save_email(&existing).await
            }
            None => {
                let now = Utc::now();
                let email = Email {
                    email: address.to_string(),
                    hash,
                    path: orcid.to_string(),
                    primary: false,
                    current: true,
                    verified: false,
                    visibility,
                    source: SourceIdentity::orcid(orcid),
                    created_date: now,
                    last_modified_date: now,
                };
                self.db.create_email(&email).await
            }
        }
    }

    /// Replace an address with an edited one.
    ///
    /// The new address starts unverified and keeps the primary flag and
    /// visibility of the original.
    pub async fn edit_email(&self, orcid: &str, original: &str, edited: &str) -> Result<Email> {
        validate_email_address(edited)?;
        let existing = self.owned_email(orcid, original).await?;

        let edited = edited.trim();
        let hash = email_hash(edited);
        if hash != existing.hash {
            if let Some(other) = self.db.find_email_by_hash(&hash).await? {
                let error = if other.path == orcid {
                    OrcidError::duplicated("email", edited)
                } else {
                    OrcidError::email_in_use(edited)
                };
                return Err(error.into());
            }
        }

        let replacement = Email {
            email: edited.to_string(),
            hash,
            verified: false,
            last_modified_date: Utc::now(),
            ..existing.clone()
        };
        let email = self.db.replace_email(&existing.hash, &replacement).await?;

        if existing.primary && existing.email != email.email {
            if let Err(error) = self
                .notifier
                .send_email_address_changed(orcid, &email.email, &existing.email)
                .await
            {
                warn!("Failed to send address changed notification for {}: {}", orcid, error);
            }
        }
        self.notify_verification(orcid, &email.email).await;

        log_record_operation("update", orcid, "email", None, orcid, "ok");
        Ok(email)
    }

    async fn owned_email(&self, orcid: &str, address: &str) -> Result<Email> {
        self.db
            .find_email_by_hash(&email_hash(address))
            .await?
            .filter(|email| email.path == orcid)
            .ok_or_else(|| OrcidError::not_found(format!("email for {}", orcid)).into())
    }

    async fn primary_email(&self, orcid: &str) -> Result<Email> {
        self.db
            .find_emails(orcid)
            .await?
            .into_iter()
            .find(|email| email.primary)
            .ok_or_else(|| OrcidError::not_found(format!("primary email for {}", orcid)).into())
    }

    async fn notify_verification(&self, orcid: &str, address: &str) {
        if let Err(error) = self.notifier.send_verification_email(orcid, address).await {
            warn!("Failed to send verification email for {}: {}", orcid, error);
        }
    }
}
