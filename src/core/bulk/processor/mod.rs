//! Bulk processor module
//!
//! - `core`: BulkWorkProcessor struct and its public entry point
//! - `validation`: whole-batch checks run before any item is touched
//! - `execution`: per-item processing and result aggregation

pub mod core;
mod execution;
mod validation;
