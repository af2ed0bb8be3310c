use crate::core::models::{NewWork, Profile, Work};
use crate::storage::WorkStore;
use crate::utils::error::{OrcidError, RegistryError, Result};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, work};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// All works of a profile, highest display index first, then newest first
    pub async fn find_works(&self, orcid: &str) -> Result<Vec<Work>> {
        debug!("Listing works for: {}", orcid);

        let models = entities::Work::find()
            .filter(work::Column::Orcid.eq(orcid))
            .order_by_desc(work::Column::DisplayIndex)
            .order_by_desc(work::Column::CreatedAt)
            .order_by_desc(work::Column::PutCode)
            .all(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(models.iter().map(|model| model.to_domain_work()).collect())
    }

    /// Find one work of a profile
    pub async fn find_work(&self, orcid: &str, put_code: i64) -> Result<Option<Work>> {
        debug!("Finding work {} for: {}", put_code, orcid);

        let model = entities::Work::find_by_id(put_code)
            .filter(work::Column::Orcid.eq(orcid))
            .one(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(model.map(|model| model.to_domain_work()))
    }

    /// Insert a work, assigning its put-code and display index.
    ///
    /// Counter increment and insert share one transaction.
    pub async fn create_work(&self, orcid: &str, new_work: NewWork) -> Result<Work> {
        debug!("Creating work for: {}", orcid);

        let txn = self.db.begin().await.map_err(RegistryError::Database)?;

        let display_index = Self::next_display_index(&txn, orcid).await?;
        let external_ids = serde_json::to_string(&new_work.external_ids)?;
        let (translated_title, translated_title_language) = match new_work.title.translated_title {
            Some(translated) => (Some(translated.value), translated.language_code),
            None => (None, None),
        };
        let now = Utc::now();

        let active_model = work::ActiveModel {
            put_code: NotSet,
            orcid: Set(orcid.to_string()),
            title: Set(new_work.title.title.unwrap_or_default()),
            subtitle: Set(new_work.title.subtitle),
            translated_title: Set(translated_title),
            translated_title_language: Set(translated_title_language),
            work_type: Set(new_work.work_type.to_string()),
            external_ids: Set(external_ids),
            visibility: Set(new_work.visibility.to_string()),
            display_index: Set(display_index),
            source_orcid: Set(new_work.source.source_orcid),
            source_client_id: Set(new_work.source.source_client_id),
            journal_title: Set(new_work.journal_title),
            short_description: Set(new_work.short_description),
            citation: Set(new_work.citation),
            url: Set(new_work.url),
            language_code: Set(new_work.language_code),
            country: Set(new_work.country),
            publication_date: Set(new_work.publication_date),
            created_at: Set(now.into()),
            last_modified: Set(now.into()),
        };

        let model = active_model
            .insert(&txn)
            .await
            .map_err(RegistryError::Database)?;

        Self::touch_profile_on(&txn, orcid).await?;
        txn.commit().await.map_err(RegistryError::Database)?;

        Ok(model.to_domain_work())
    }

    /// Persist caller-editable fields of an existing work
    pub async fn save_work(&self, updated: &Work) -> Result<Work> {
        debug!("Updating work {} for: {}", updated.put_code, updated.path);

        let model = entities::Work::find_by_id(updated.put_code)
            .filter(work::Column::Orcid.eq(updated.path.as_str()))
            .one(&self.db)
            .await
            .map_err(RegistryError::Database)?
            .ok_or_else(|| OrcidError::not_found(format!("work {}", updated.put_code)))?;

        let (translated_title, translated_title_language) =
            match updated.title.translated_title.clone() {
                Some(translated) => (Some(translated.value), translated.language_code),
                None => (None, None),
            };

        let mut active_model: work::ActiveModel = model.into();
        active_model.title = Set(updated.title.title.clone().unwrap_or_default());
        active_model.subtitle = Set(updated.title.subtitle.clone());
        active_model.translated_title = Set(translated_title);
        active_model.translated_title_language = Set(translated_title_language);
        active_model.work_type = Set(updated.work_type.to_string());
        active_model.external_ids = Set(serde_json::to_string(&updated.external_ids)?);
        active_model.journal_title = Set(updated.journal_title.clone());
        active_model.short_description = Set(updated.short_description.clone());
        active_model.citation = Set(updated.citation.clone());
        active_model.url = Set(updated.url.clone());
        active_model.language_code = Set(updated.language_code.clone());
        active_model.country = Set(updated.country.clone());
        active_model.publication_date = Set(updated.publication_date.clone());
        active_model.last_modified = Set(updated.last_modified_date.into());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(model.to_domain_work())
    }

    /// Delete one work; `false` when it did not exist
    pub async fn remove_work(&self, orcid: &str, put_code: i64) -> Result<bool> {
        debug!("Deleting work {} for: {}", put_code, orcid);

        let result = entities::Work::delete_many()
            .filter(work::Column::PutCode.eq(put_code))
            .filter(work::Column::Orcid.eq(orcid))
            .exec(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl WorkStore for SeaOrmDatabase {
    async fn load_profile(&self, orcid: &str) -> Result<Option<Profile>> {
        self.find_profile(orcid).await
    }

    async fn list_works(&self, orcid: &str) -> Result<Vec<Work>> {
        self.find_works(orcid).await
    }

    async fn load_work(&self, orcid: &str, put_code: i64) -> Result<Option<Work>> {
        self.find_work(orcid, put_code).await
    }

    async fn insert_work(&self, orcid: &str, work: NewWork) -> Result<Work> {
        self.create_work(orcid, work).await
    }

    async fn update_work(&self, work: &Work) -> Result<Work> {
        self.save_work(work).await
    }

    async fn delete_work(&self, orcid: &str, put_code: i64) -> Result<bool> {
        self.remove_work(orcid, put_code).await
    }
}
