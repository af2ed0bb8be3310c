//! Bulk request configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Bulk work processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkConfig {
    /// Maximum number of elements accepted in one bulk request
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
        }
    }
}
