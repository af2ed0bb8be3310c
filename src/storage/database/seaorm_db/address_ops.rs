use crate::core::models::{Address, Visibility};
use crate::core::source::SourceIdentity;
use crate::utils::error::{OrcidError, RegistryError, Result};
use chrono::Utc;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, address};
use super::types::SeaOrmDatabase;

/// A validated address ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub country: String,
    pub visibility: Visibility,
    pub source: SourceIdentity,
    /// Taken from the profile counter when absent
    pub display_index: Option<i64>,
}

impl SeaOrmDatabase {
    /// All addresses of a profile, highest display index first
    pub async fn find_addresses(&self, orcid: &str) -> Result<Vec<Address>> {
        debug!("Listing addresses for: {}", orcid);

        let models = entities::Address::find()
            .filter(address::Column::Orcid.eq(orcid))
            .order_by_desc(address::Column::DisplayIndex)
            .order_by_desc(address::Column::CreatedAt)
            .order_by_desc(address::Column::PutCode)
            .all(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(models.iter().map(|model| model.to_domain_address()).collect())
    }

    /// Find one address of a profile
    pub async fn find_address(&self, orcid: &str, put_code: i64) -> Result<Option<Address>> {
        let model = entities::Address::find_by_id(put_code)
            .filter(address::Column::Orcid.eq(orcid))
            .one(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(model.map(|model| model.to_domain_address()))
    }

    /// Insert an address
    pub async fn create_address(&self, orcid: &str, new_address: NewAddress) -> Result<Address> {
        debug!("Creating address {} for: {}", new_address.country, orcid);

        let txn = self.db.begin().await.map_err(RegistryError::Database)?;
        let address = Self::insert_address_on(&txn, orcid, new_address).await?;
        Self::touch_profile_on(&txn, orcid).await?;
        txn.commit().await.map_err(RegistryError::Database)?;

        Ok(address)
    }

    /// Persist country, visibility and display index of an existing address
    pub async fn save_address(&self, updated: &Address) -> Result<Address> {
        debug!("Updating address {} for: {}", updated.put_code, updated.path);
        Self::update_address_on(&self.db, updated).await
    }

    /// Apply a full address list edit in one transaction.
    ///
    /// Deletes `removed`, rewrites `updated` and inserts `created`; nothing
    /// is kept when any step fails.
    pub async fn sync_addresses(
        &self,
        orcid: &str,
        removed: &[i64],
        updated: &[Address],
        created: Vec<NewAddress>,
    ) -> Result<Vec<Address>> {
        debug!(
            "Syncing addresses for {}: {} removed, {} updated, {} created",
            orcid,
            removed.len(),
            updated.len(),
            created.len()
        );

        let txn = self.db.begin().await.map_err(RegistryError::Database)?;

        if !removed.is_empty() {
            entities::Address::delete_many()
                .filter(address::Column::PutCode.is_in(removed.iter().copied()))
                .filter(address::Column::Orcid.eq(orcid))
                .exec(&txn)
                .await
                .map_err(RegistryError::Database)?;
        }
        for address in updated {
            Self::update_address_on(&txn, address).await?;
        }
        for new_address in created {
            Self::insert_address_on(&txn, orcid, new_address).await?;
        }

        Self::touch_profile_on(&txn, orcid).await?;
        txn.commit().await.map_err(RegistryError::Database)?;

        self.find_addresses(orcid).await
    }

    async fn insert_address_on<C: ConnectionTrait>(
        conn: &C,
        orcid: &str,
        new_address: NewAddress,
    ) -> Result<Address> {
        let display_index = match new_address.display_index {
            Some(index) => index,
            None => Self::next_display_index(conn, orcid).await?,
        };
        let now = Utc::now();

        let active_model = address::ActiveModel {
            put_code: NotSet,
            orcid: Set(orcid.to_string()),
            country: Set(new_address.country),
            visibility: Set(new_address.visibility.to_string()),
            display_index: Set(display_index),
            source_orcid: Set(new_address.source.source_orcid),
            source_client_id: Set(new_address.source.source_client_id),
            created_at: Set(now.into()),
            last_modified: Set(now.into()),
        };

        let model = active_model
            .insert(conn)
            .await
            .map_err(RegistryError::Database)?;

        Ok(model.to_domain_address())
    }

    async fn update_address_on<C: ConnectionTrait>(conn: &C, updated: &Address) -> Result<Address> {
        let model = entities::Address::find_by_id(updated.put_code)
            .filter(address::Column::Orcid.eq(updated.path.as_str()))
            .one(conn)
            .await
            .map_err(RegistryError::Database)?
            .ok_or_else(|| OrcidError::not_found(format!("address {}", updated.put_code)))?;

        let mut active_model: address::ActiveModel = model.into();
        active_model.country = Set(updated.country.clone());
        active_model.visibility = Set(updated.visibility.to_string());
        active_model.display_index = Set(updated.display_index);
        active_model.last_modified = Set(Utc::now().into());

        let model = active_model
            .update(conn)
            .await
            .map_err(RegistryError::Database)?;

        Ok(model.to_domain_address())
    }

    /// Delete one address; `false` when it did not exist
    pub async fn remove_address(&self, orcid: &str, put_code: i64) -> Result<bool> {
        debug!("Deleting address {} for: {}", put_code, orcid);

        let result = entities::Address::delete_many()
            .filter(address::Column::PutCode.eq(put_code))
            .filter(address::Column::Orcid.eq(orcid))
            .exec(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(result.rows_affected > 0)
    }
}
