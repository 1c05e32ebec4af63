use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::display_data::derive_display_record;
use super::display_data::ActivityContext;
use super::display_data::DisplayRecord;
use super::error::ActivityError;
use crate::models::transaction::TransactionGroup;

/// Derived records keyed by `(initial transaction id, snapshot version)`.
///
/// Owned by the caller. Each entry remembers the group it was derived from:
/// a group that has changed since (retried, confirmed, failed) is derived
/// again under the same key. A new snapshot version misses the cache, and
/// stale entries stay until [`DisplayRecordCache::prune_stale`] is called.
/// Failed derivations are not cached.
#[derive(Debug, Clone, Default)]
pub struct DisplayRecordCache {
    records: HashMap<(u64, u64), (TransactionGroup, DisplayRecord)>,
}

impl DisplayRecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get_or_derive(
        &mut self,
        group: &TransactionGroup,
        context: &ActivityContext<'_>,
    ) -> Result<&DisplayRecord, ActivityError> {
        match self.records.entry((group.id(), context.snapshot.version)) {
            Entry::Occupied(entry) if entry.get().0 == *group => Ok(&entry.into_mut().1),
            Entry::Occupied(mut entry) => match derive_display_record(group, context) {
                Ok(record) => {
                    entry.insert((group.clone(), record));
                    Ok(&entry.into_mut().1)
                }
                Err(error) => {
                    entry.remove();
                    Err(error)
                }
            },
            Entry::Vacant(entry) => {
                let record = derive_display_record(group, context)?;
                Ok(&entry.insert((group.clone(), record)).1)
            }
        }
    }

    /// Drop every entry derived from a snapshot older than `version`.
    pub fn prune_stale(&mut self, version: u64) {
        self.records
            .retain(|&(_, record_version), _| record_version >= version);
    }
}
