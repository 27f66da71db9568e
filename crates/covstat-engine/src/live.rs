use covstat_types::{ListEntry, ListEntryDifference};
use std::collections::HashMap;

/// A territory whose tracked metrics moved since the previous poll
#[derive(Debug, Clone, PartialEq)]
pub struct LiveChange {
    pub entry: ListEntry,
    pub difference: ListEntryDifference,
}

/// Last observed entry per territory, keyed by the territory name verbatim.
///
/// Owned by the live loop. Grows to one entry per distinct territory ever
/// reported and is never pruned.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    entries: HashMap<String, ListEntry>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff a freshly fetched snapshot against the cache, then store it.
    ///
    /// Territories seen for the first time and territories without movement
    /// produce no change. Changes keep the order of `snapshot`. Every entry
    /// overwrites its cache slot, so deltas always span one poll interval.
    pub fn apply(&mut self, snapshot: Vec<ListEntry>) -> Vec<LiveChange> {
        let mut changes = Vec::new();

        for entry in snapshot {
            if let Some(previous) = self.entries.get(&entry.territory) {
                let difference = ListEntryDifference::between(previous, &entry);
                if !difference.is_empty() {
                    changes.push(LiveChange {
                        entry: entry.clone(),
                        difference,
                    });
                }
            }

            self.entries.insert(entry.territory.clone(), entry);
        }

        changes
    }

    pub fn get(&self, territory: &str) -> Option<&ListEntry> {
        self.entries.get(territory)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
