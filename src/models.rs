//! Frontend Models
//!
//! A todo entry and its in-memory identity.

use std::fmt;
use uuid::Uuid;

/// Stable identity of an entry for as long as it lives in memory.
///
/// Ids are never persisted; entries loaded from a snapshot get fresh ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub text: String,
}

impl Entry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            text: text.into(),
        }
    }
}
