//! # ORCID Registry
//!
//! Researcher identity registry: each profile owns works, addresses and
//! emails, every sub-record remembers its source, and a bulk endpoint creates
//! or updates up to 1000 works per call with per-item error reporting.
//!
//! ## Features
//!
//! - **Bulk works**: ordered results, one work or error per input item
//! - **Source tracking**: only the creating client or person may edit a record
//! - **Visibility rules**: profile defaults on create, immutable through the API
//! - **Duplicate detection**: by SELF external identifier, across and within batches
//! - **JSON and XML**: negotiated from `Content-Type` and `Accept`
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use orcid_registry::{Config, Registry};
//! use orcid_registry::core::models::{ExternalId, WorkCandidate, WorkType};
//! use orcid_registry::core::source::{Caller, SourceIdentity};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/registry.yaml").await?;
//!     let registry = Registry::new(config).await?;
//!
//!     let caller = Caller::api(SourceIdentity::client("APP-0000000000000001"));
//!     let work = WorkCandidate::new(
//!         "On the Electrodynamics of Moving Bodies",
//!         WorkType::JournalArticle,
//!         ExternalId::new_self("doi", "10.1002/andp.19053221004"),
//!     );
//!
//!     let bulk = registry
//!         .bulk()
//!         .process_batch("0000-0002-1825-0097", &caller, vec![work])
//!         .await?;
//!     println!("created {} works", bulk.created_count());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::Registry;
pub use core::bulk::{BulkElement, BulkWorkProcessor, MAX_BULK_SIZE, WorkBulk};
pub use utils::error::{OrcidError, OrcidErrorCode, RegistryError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Registry build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
