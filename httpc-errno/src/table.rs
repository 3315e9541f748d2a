//! Insert-if-absent code table
//!
//! Several platform symbols alias one integer (`EWOULDBLOCK`/`EAGAIN`,
//! `EDEADLK`/`EDEADLOCK`). The first registration for a code owns it and
//! later registrations are dropped, so insertion order decides which name
//! is reported.

use std::collections::hash_map::{self, HashMap};

use crate::entry::Entry;

/// Mapping from error code to its first-registered entry
#[derive(Debug, Clone, Default)]
pub struct ErrorTable {
    entries: HashMap<i32, Entry>,
}

impl ErrorTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding only the code-0 sentinel
    pub fn with_sentinel() -> Self {
        let mut table = Self::new();
        table.insert_if_absent(Entry::sentinel());
        table
    }

    /// Register `entry` unless its code is already taken.
    ///
    /// Returns `true` when the entry was stored.
    pub fn insert_if_absent(&mut self, entry: Entry) -> bool {
        match self.entries.entry(entry.code()) {
            hash_map::Entry::Occupied(existing) => {
                tracing::trace!(
                    code = entry.code(),
                    kept = existing.get().name(),
                    skipped = entry.name(),
                    "error code already registered"
                );
                false
            }
            hash_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    /// Entry for `code`, if registered
    #[inline]
    pub fn get(&self, code: i32) -> Option<&Entry> {
        self.entries.get(&code)
    }

    /// Whether `code` is registered
    #[inline]
    pub fn contains(&self, code: i32) -> bool {
        self.entries.contains_key(&code)
    }

    /// Number of registered codes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by ascending code
    pub fn sorted(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.code());
        entries
    }
}
