use crate::core::models::Email;
use crate::utils::error::{OrcidError, RegistryError, Result};
use chrono::Utc;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, email};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find an email by the hash of its address
    pub async fn find_email_by_hash(&self, hash: &str) -> Result<Option<Email>> {
        let model = entities::Email::find_by_id(hash.to_string())
            .one(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(model.map(|model| model.to_domain_email()))
    }

    /// All emails of a profile, primary first
    pub async fn find_emails(&self, orcid: &str) -> Result<Vec<Email>> {
        debug!("Listing emails for: {}", orcid);

        let models = entities::Email::find()
            .filter(email::Column::Orcid.eq(orcid))
            .order_by_desc(email::Column::IsPrimary)
            .order_by_asc(email::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(models.iter().map(|model| model.to_domain_email()).collect())
    }

    /// Emails matching any of the given hashes
    pub async fn find_emails_by_hashes(&self, hashes: Vec<String>) -> Result<Vec<Email>> {
        if hashes.is_empty() {
            return Ok(Vec::new());
        }

        let models = entities::Email::find()
            .filter(email::Column::EmailHash.is_in(hashes))
            .all(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(models.iter().map(|model| model.to_domain_email()).collect())
    }

    /// Insert an email
    pub async fn create_email(&self, new_email: &Email) -> Result<Email> {
        debug!("Creating email for: {}", new_email.path);

        let txn = self.db.begin().await.map_err(RegistryError::Database)?;

        let model = email::Model::from_domain_email(new_email)
            .insert(&txn)
            .await
            .map_err(RegistryError::Database)?;

        Self::touch_profile_on(&txn, &new_email.path).await?;
        txn.commit().await.map_err(RegistryError::Database)?;

        Ok(model.to_domain_email())
    }

    /// Persist every field of an existing email, keyed by its hash
    pub async fn save_email(&self, updated: &Email) -> Result<Email> {
        debug!("Updating email for: {}", updated.path);

        let existing = entities::Email::find_by_id(updated.hash.clone())
            .one(&self.db)
            .await
            .map_err(RegistryError::Database)?
            .ok_or_else(|| OrcidError::not_found("email"))?;

        let mut active_model: email::ActiveModel = existing.into();
        active_model.orcid = Set(updated.path.clone());
        active_model.is_primary = Set(updated.primary);
        active_model.is_current = Set(updated.current);
        active_model.is_verified = Set(updated.verified);
        active_model.visibility = Set(updated.visibility.to_string());
        active_model.source_orcid = Set(updated.source.source_orcid.clone());
        active_model.source_client_id = Set(updated.source.source_client_id.clone());
        active_model.last_modified = Set(Utc::now().into());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(model.to_domain_email())
    }

    /// Swap one address for another under the same primary key space.
    ///
    /// The hash is the primary key, so a changed address is a delete plus an
    /// insert inside one transaction.
    pub async fn replace_email(&self, old_hash: &str, replacement: &Email) -> Result<Email> {
        debug!("Replacing email for: {}", replacement.path);

        let txn = self.db.begin().await.map_err(RegistryError::Database)?;

        entities::Email::delete_by_id(old_hash.to_string())
            .exec(&txn)
            .await
            .map_err(RegistryError::Database)?;

        let model = email::Model::from_domain_email(replacement)
            .insert(&txn)
            .await
            .map_err(RegistryError::Database)?;

        Self::touch_profile_on(&txn, &replacement.path).await?;
        txn.commit().await.map_err(RegistryError::Database)?;

        Ok(model.to_domain_email())
    }

    /// Clear the primary flag on every email of a profile except one
    pub async fn clear_other_primary_emails(&self, orcid: &str, keep_hash: &str) -> Result<u64> {
        let result = entities::Email::update_many()
            .col_expr(email::Column::IsPrimary, sea_orm::sea_query::Expr::value(false))
            .filter(email::Column::Orcid.eq(orcid))
            .filter(email::Column::EmailHash.ne(keep_hash))
            .exec(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(result.rows_affected)
    }

    /// Delete an email of a profile; `false` when it did not exist
    pub async fn remove_email(&self, orcid: &str, hash: &str) -> Result<bool> {
        debug!("Deleting email for: {}", orcid);

        let result = entities::Email::delete_many()
            .filter(email::Column::EmailHash.eq(hash))
            .filter(email::Column::Orcid.eq(orcid))
            .exec(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(result.rows_affected > 0)
    }
}
