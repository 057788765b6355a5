//! Applying the one-time load to the in-memory list.

use crate::error::TodoResult;
use crate::todo_list::TodoList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Snapshot parsed with this many entries
    Snapshot(usize),
    /// Nothing stored yet
    Missing,
    /// Read or parse failed; treated as no prior data
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub source: LoadSource,
    /// Entries created before the load finished, kept after the loaded ones
    pub kept_local: usize,
}

impl LoadReport {
    /// Pre-load entries were never written, so the merged list must be
    pub fn needs_write_back(&self) -> bool {
        self.kept_local > 0
    }
}

/// Merge the load result into `list`. Never fails.
pub fn settle_load(list: &mut TodoList, loaded: TodoResult<Option<TodoList>>) -> LoadReport {
    let kept_local = list.len();
    match loaded {
        Ok(Some(snapshot)) => {
            let count = snapshot.len();
            let kept_local = list.absorb_loaded(snapshot);
            LoadReport {
                source: LoadSource::Snapshot(count),
                kept_local,
            }
        }
        Ok(None) => LoadReport {
            source: LoadSource::Missing,
            kept_local,
        },
        Err(err) => LoadReport {
            source: LoadSource::Failed(err.to_string()),
            kept_local,
        },
    }
}
