//! Core functionality for the registry
//!
//! This module contains the record managers, the bulk work processor and the
//! domain models they share.

pub mod addresses;
pub mod bulk;
pub mod emails;
pub mod locks;
pub mod models;
pub mod notifications;
pub mod source;
pub mod validation;
pub mod works;

use crate::config::Config;
use crate::core::addresses::AddressManager;
use crate::core::bulk::BulkWorkProcessor;
use crate::core::emails::EmailManager;
use crate::core::locks::OwnerLocks;
use crate::core::notifications::{LoggingNotifier, Notifier};
use crate::core::works::WorkManager;
use crate::storage::database::Database;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Wires the store, the owner locks and every record manager together
#[derive(Clone)]
pub struct Registry {
    config: Arc<Config>,
    database: Arc<Database>,
    works: Arc<WorkManager>,
    bulk: BulkWorkProcessor,
    addresses: AddressManager,
    emails: EmailManager,
}

impl Registry {
    /// Connect to the configured database and build every manager
    pub async fn new(config: Config) -> Result<Self> {
        info!("Initializing registry");

        debug!("Connecting to database");
        let database = Database::connect_and_migrate(&config.storage().database).await?;

        let registry = Self::with_database(config, database, Arc::new(LoggingNotifier));
        info!("Registry initialized successfully");
        Ok(registry)
    }

    /// Build the managers over an already connected database
    pub fn with_database(config: Config, database: Database, notifier: Arc<dyn Notifier>) -> Self {
        let database = Arc::new(database);
        let locks = Arc::new(OwnerLocks::new());

        let works = Arc::new(WorkManager::new(database.clone(), locks.clone()));
        let bulk = BulkWorkProcessor::with_max_batch_size(works.clone(), config.bulk().max_batch_size);
        let addresses = AddressManager::new(database.clone(), locks);
        let emails = EmailManager::new(database.clone(), notifier);

        Self {
            config: Arc::new(config),
            database,
            works,
            bulk,
            addresses,
            emails,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn works(&self) -> &WorkManager {
        &self.works
    }

    pub fn bulk(&self) -> &BulkWorkProcessor {
        &self.bulk
    }

    pub fn addresses(&self) -> &AddressManager {
        &self.addresses
    }

    pub fn emails(&self) -> &EmailManager {
        &self.emails
    }
}
