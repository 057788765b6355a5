//! Error types shared by storage, repository and store.

use thiserror::Error;

use crate::models::EntryId;

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("key-value storage is unavailable: {0}")]
    StorageUnavailable(String),

    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("gave up writing `{key}` after {attempts} attempts")]
    WriteExhausted {
        key: String,
        attempts: u32,
        #[source]
        source: Box<TodoError>,
    },

    #[error("malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("position {position} is out of range for a list of {len} entries")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("no entry with id {0}")]
    UnknownEntry(EntryId),
}
