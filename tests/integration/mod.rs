//! Integration tests for orcid-registry
//!
//! These tests run the managers and the HTTP layer against a real in-memory
//! SQLite database.

pub mod address_tests;
pub mod bulk_works_tests;
pub mod config_tests;
pub mod email_tests;
pub mod work_update_tests;
