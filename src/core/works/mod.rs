//! Single-record work operations
//!
//! - `manager`: create, read, list, update and delete of works
//! - `duplicates`: SELF external identifier comparison under one source

pub mod duplicates;
mod manager;

pub use duplicates::DuplicateIndex;
pub use manager::WorkManager;
