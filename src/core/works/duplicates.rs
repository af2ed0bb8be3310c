//! Duplicate detection for works

use crate::core::models::{ExternalIdKey, Work};
use crate::core::source::Caller;
use std::collections::HashMap;

/// SELF identifiers of one owner's works that share the caller's source.
///
/// Works created or updated during a batch are recorded as they happen, so
/// later items in the same batch see them.
#[derive(Debug, Default)]
pub struct DuplicateIndex {
    keys: HashMap<ExternalIdKey, Vec<i64>>,
}

impl DuplicateIndex {
    /// Index the works whose source is the caller
    pub fn for_caller(works: &[Work], caller: &Caller) -> Self {
        let mut index = Self::default();
        for work in works.iter().filter(|work| caller.is_source_of(&work.source)) {
            if let Some(key) = work.self_key() {
                index.record(key, work.put_code);
            }
        }
        index
    }

    /// Put-code of a clashing work other than `exclude`
    pub fn find(&self, key: &ExternalIdKey, exclude: Option<i64>) -> Option<i64> {
        self.keys
            .get(key)?
            .iter()
            .copied()
            .find(|put_code| Some(*put_code) != exclude)
    }

    pub fn record(&mut self, key: ExternalIdKey, put_code: i64) {
        let put_codes = self.keys.entry(key).or_default();
        if !put_codes.contains(&put_code) {
            put_codes.push(put_code);
        }
    }

    pub fn forget(&mut self, key: &ExternalIdKey, put_code: i64) {
        if let Some(put_codes) = self.keys.get_mut(key) {
            put_codes.retain(|existing| *existing != put_code);
            if put_codes.is_empty() {
                self.keys.remove(key);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.keys.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
