//! Storage layer for the registry
//!
//! Works are reached through [`WorkStore`] so processing logic can run
//! against any backend; addresses, emails and profiles use the database
//! directly.

/// Database storage module
pub mod database;

use crate::core::models::{NewWork, Profile, Work};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence operations the work manager and bulk processor need
#[async_trait]
pub trait WorkStore: Send + Sync {
    /// Owner profile, `None` when it does not exist
    async fn load_profile(&self, orcid: &str) -> Result<Option<Profile>>;

    /// Every work of a profile in display order
    async fn list_works(&self, orcid: &str) -> Result<Vec<Work>>;

    /// One work of a profile
    async fn load_work(&self, orcid: &str, put_code: i64) -> Result<Option<Work>>;

    /// Atomically take the next display index and insert the work
    async fn insert_work(&self, orcid: &str, work: NewWork) -> Result<Work>;

    /// Persist caller-editable fields of an existing work
    async fn update_work(&self, work: &Work) -> Result<Work>;

    /// Delete a work; `false` when it did not exist
    async fn delete_work(&self, orcid: &str, put_code: i64) -> Result<bool>;
}
