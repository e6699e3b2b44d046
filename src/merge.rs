//! Merge Engine
//!
//! Combines a bundled [`PropertyStore`] into an existing one. The source
//! always wins on value; keys new to the target are appended after every
//! existing entry in source order. Comments never transfer.

use crate::prefs::PropertyStore;
use serde::Serialize;
use tracing::debug;

/// A key present in both stores whose values differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub key: String,
    pub old: String,
    pub new: String,
}

/// Per-key classification of a pending merge, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    /// Keys only in the source.
    pub added: Vec<String>,
    /// Keys in both stores with differing values.
    pub changed: Vec<String>,
    /// Keys in both stores with identical values.
    pub unchanged: Vec<String>,
}

impl MergeSummary {
    /// Whether merging would alter the target at all.
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.changed.is_empty()
    }
}

/// Real conflicts between `target` and `source`, in source order.
///
/// Keys with equal values in both stores are not conflicts, and neither are
/// keys that only exist in `source`.
pub fn find_conflicts(target: &PropertyStore, source: &PropertyStore) -> Vec<Conflict> {
    source
        .keys()
        .filter_map(|key| {
            let old = target.get(key)?;
            let new = source.get(key)?;
            (old != new).then(|| Conflict {
                key: key.to_string(),
                old: old.to_string(),
                new: new.to_string(),
            })
        })
        .collect()
}

/// Classify every source key against `target`. An absent target makes every key new.
pub fn summarize(target: Option<&PropertyStore>, source: &PropertyStore) -> MergeSummary {
    let mut summary = MergeSummary::default();
    for key in source.keys() {
        match target.and_then(|t| t.get(key)) {
            None => summary.added.push(key.to_string()),
            Some(old) if Some(old) != source.get(key) => summary.changed.push(key.to_string()),
            Some(_) => summary.unchanged.push(key.to_string()),
        }
    }
    summary
}

impl PropertyStore {
    /// Merge `source` into `self` in place, giving `source` priority.
    pub fn merge_from(&mut self, source: &PropertyStore) {
        let mut appended = 0usize;
        for key in source.keys() {
            let Some(value) = source.get(key) else {
                continue;
            };
            if self.contains_key(key) {
                self.set_value(key, value);
            } else {
                self.insert_token(key.to_string(), value.to_string());
                appended += 1;
            }
        }
        debug!(appended, total = self.len(), "Merged preferences");
    }
}

/// Merge `source` into `target`. With no target the result is `source` unchanged.
pub fn merge(target: Option<PropertyStore>, source: PropertyStore) -> PropertyStore {
    match target {
        None => source,
        Some(mut target) => {
            target.merge_from(&source);
            target
        }
    }
}
