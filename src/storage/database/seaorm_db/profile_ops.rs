use crate::core::models::{Profile, Visibility};
use crate::utils::error::{OrcidError, RegistryError, Result};
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, profile};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find a profile by ORCID iD
    pub async fn find_profile(&self, orcid: &str) -> Result<Option<Profile>> {
        debug!("Finding profile: {}", orcid);

        let model = entities::Profile::find_by_id(orcid.to_string())
            .one(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(model.map(|model| model.to_domain_profile()))
    }

    /// Find a profile, failing with a not-found error when absent
    pub async fn require_profile(&self, orcid: &str) -> Result<Profile> {
        self.find_profile(orcid)
            .await?
            .ok_or_else(|| OrcidError::not_found(format!("profile {}", orcid)).into())
    }

    /// Create a new profile
    pub async fn create_profile(
        &self,
        orcid: &str,
        claimed: bool,
        default_visibility: Option<Visibility>,
    ) -> Result<Profile> {
        debug!("Creating profile: {}", orcid);

        let now = Utc::now();
        let active_model = profile::ActiveModel {
            orcid: Set(orcid.to_string()),
            claimed: Set(claimed),
            default_visibility: Set(default_visibility.map(|v| v.to_string())),
            display_index_counter: Set(0),
            created_at: Set(now.into()),
            last_modified: Set(now.into()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(model.to_domain_profile())
    }

    /// Update the claimed flag and default visibility of a profile
    pub async fn update_profile_settings(
        &self,
        orcid: &str,
        claimed: bool,
        default_visibility: Option<Visibility>,
    ) -> Result<Profile> {
        debug!("Updating profile settings: {}", orcid);

        let model = entities::Profile::find_by_id(orcid.to_string())
            .one(&self.db)
            .await
            .map_err(RegistryError::Database)?
            .ok_or_else(|| OrcidError::not_found(format!("profile {}", orcid)))?;

        let mut active_model: profile::ActiveModel = model.into();
        active_model.claimed = Set(claimed);
        active_model.default_visibility = Set(default_visibility.map(|v| v.to_string()));
        active_model.last_modified = Set(Utc::now().into());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(model.to_domain_profile())
    }

    /// Refresh the last-modified timestamp of a profile
    pub async fn touch_profile(&self, orcid: &str) -> Result<()> {
        Self::touch_profile_on(&self.db, orcid).await
    }

    pub(super) async fn touch_profile_on<C: ConnectionTrait>(conn: &C, orcid: &str) -> Result<()> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        entities::Profile::update_many()
            .col_expr(profile::Column::LastModified, Expr::value(now))
            .filter(profile::Column::Orcid.eq(orcid))
            .exec(conn)
            .await
            .map_err(RegistryError::Database)?;

        Ok(())
    }

    /// Hand out the next display index of a profile.
    ///
    /// The counter is bumped with a single `UPDATE counter = counter + 1`, so
    /// callers running inside a transaction see their own increment only.
    pub(super) async fn next_display_index<C: ConnectionTrait>(conn: &C, orcid: &str) -> Result<i64> {
        let result = entities::Profile::update_many()
            .col_expr(
                profile::Column::DisplayIndexCounter,
                Expr::col(profile::Column::DisplayIndexCounter).add(1),
            )
            .filter(profile::Column::Orcid.eq(orcid))
            .exec(conn)
            .await
            .map_err(RegistryError::Database)?;

        if result.rows_affected == 0 {
            return Err(OrcidError::not_found(format!("profile {}", orcid)).into());
        }

        let model = entities::Profile::find_by_id(orcid.to_string())
            .one(conn)
            .await
            .map_err(RegistryError::Database)?
            .ok_or_else(|| OrcidError::not_found(format!("profile {}", orcid)))?;

        Ok(model.display_index_counter)
    }
}
