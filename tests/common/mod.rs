//! Common test utilities for orcid-registry
//!
//! - In-memory SQLite database with a seeded profile
//! - Candidate factories and caller fixtures

pub mod database;
pub mod fixtures;

// Re-export commonly used items
pub use database::{TestDatabase, TestRegistry};
pub use fixtures::{CallerFactory, ORCID, OTHER_ORCID, WorkFactory};
