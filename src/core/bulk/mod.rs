//! Bulk work processing
//!
//! A bulk request carries up to a fixed number of candidate works. Each item
//! is validated and persisted on its own; the response holds, in input
//! order, either the created work or the error for that item.

mod processor;
mod types;


pub use processor::core::BulkWorkProcessor;
pub use types::{BulkElement, BulkInput, MAX_BULK_SIZE, WorkBulk};
