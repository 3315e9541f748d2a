//! The error registry
//!
//! An [`ErrorRegistry`] is an immutable code table plus the three lookups
//! callers use when turning a native error code into diagnostic text. None
//! of the lookups can fail: unknown codes degrade to a numeric fallback.

mod builder;
mod global;

pub use builder::RegistryBuilder;
pub use global::{describe, init, message_of, name_of, registry};

use std::borrow::Cow;

use crate::entry::Entry;
use crate::error::Result;
use crate::platform::Platform;
use crate::table::ErrorTable;

/// Immutable code-to-entry table for one platform
#[derive(Debug, Clone)]
pub struct ErrorRegistry {
    platform: Platform,
    table: ErrorTable,
}

impl ErrorRegistry {
    /// Create a registry builder
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build from the embedded manifests for `platform`
    pub fn for_platform(platform: Platform) -> Result<Self> {
        RegistryBuilder::new().platform(platform).build()
    }

    /// Registry holding only the code-0 sentinel
    pub(crate) fn sentinel_only(platform: Platform) -> Self {
        Self {
            platform,
            table: ErrorTable::with_sentinel(),
        }
    }

    pub(crate) fn from_table(platform: Platform, table: ErrorTable) -> Self {
        Self { platform, table }
    }

    /// Symbolic name for `code`, or its decimal form when unknown
    pub fn name_of(&self, code: i32) -> Cow<'_, str> {
        match self.table.get(code) {
            Some(entry) => Cow::Borrowed(entry.name()),
            None => Cow::Owned(code.to_string()),
        }
    }

    /// Description for `code`, or `"Unknown error (code N)"` when unknown
    pub fn message_of(&self, code: i32) -> Cow<'_, str> {
        match self.table.get(code) {
            Some(entry) => Cow::Borrowed(entry.message()),
            None => Cow::Owned(unknown_message(code)),
        }
    }

    /// Same as [`message_of`](Self::message_of)
    #[inline]
    pub fn describe(&self, code: i32) -> Cow<'_, str> {
        self.message_of(code)
    }

    /// Registered entry for `code`
    pub fn lookup(&self, code: i32) -> Option<&Entry> {
        self.table.get(code)
    }

    /// Whether `code` is registered
    pub fn contains(&self, code: i32) -> bool {
        self.table.contains(code)
    }

    /// Number of registered codes, sentinel included
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Registered entries in ascending code order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.table.sorted().into_iter()
    }

    /// Platform whose manifest populated the table
    pub fn platform(&self) -> Platform {
        self.platform
    }
}

fn unknown_message(code: i32) -> String {
    format!("Unknown error (code {code})")
}
