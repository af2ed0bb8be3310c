//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite database.

use orcid_registry::config::{Config, DatabaseConfig};
use orcid_registry::core::Registry;
use orcid_registry::core::models::Visibility;
use orcid_registry::core::notifications::{Notifier, RecordingNotifier};
use orcid_registry::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let db = Database::connect_and_migrate(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to create in-memory test database");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a database holding one unclaimed profile
    pub async fn with_profile(orcid: &str) -> Self {
        let db = Self::new().await;
        db.add_profile(orcid, false, None).await;
        db
    }

    pub async fn add_profile(
        &self,
        orcid: &str,
        claimed: bool,
        default_visibility: Option<Visibility>,
    ) {
        self.inner
            .create_profile(orcid, claimed, default_visibility)
            .await
            .expect("Failed to create test profile");
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }
}

/// Registry over a test database with a recording notifier
pub struct TestRegistry {
    pub database: TestDatabase,
    pub registry: Registry,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestRegistry {
    pub async fn new() -> Self {
        Self::over(TestDatabase::new().await)
    }

    /// Registry with one unclaimed profile
    pub async fn with_profile(orcid: &str) -> Self {
        Self::over(TestDatabase::with_profile(orcid).await)
    }

    pub fn over(database: TestDatabase) -> Self {
        Self::over_with(database, Config::default())
    }

    pub fn over_with(database: TestDatabase, config: Config) -> Self {
        let notifier = Arc::new(RecordingNotifier::new());
        let shared: Arc<dyn Notifier> = notifier.clone();
        let registry = Registry::with_database(config, database.db().clone(), shared);
        Self {
            database,
            registry,
            notifier,
        }
    }
}
