//! Snapshot Repository
//!
//! One key, one JSON value. Writes report their result and retry with a
//! linear backoff; a write overtaken by a newer one stops retrying.

use std::cell::Cell;

use crate::config::TodoConfig;
use crate::error::{TodoError, TodoResult};
use crate::storage::KeyValueStore;
use crate::todo_list::TodoList;

/// How a `save` ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// A newer save started while this one was waiting to retry
    Superseded,
}

pub struct SnapshotRepository {
    storage: Box<dyn KeyValueStore>,
    key: String,
    write_attempts: u32,
    retry_delay_ms: u32,
    latest_write: Cell<u64>,
}

impl SnapshotRepository {
    pub fn new(storage: Box<dyn KeyValueStore>, config: &TodoConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
            write_attempts: config.write_attempts.max(1),
            retry_delay_ms: config.retry_delay_ms,
            latest_write: Cell::new(0),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the snapshot; `Ok(None)` when nothing was ever saved
    pub async fn load(&self) -> TodoResult<Option<TodoList>> {
        let Some(raw) = self.storage.get(&self.key).await? else {
            return Ok(None);
        };
        let list = TodoList::from_snapshot(&raw)?;
        log::debug!("[REPO] Loaded {} entries from `{}`", list.len(), self.key);
        Ok(Some(list))
    }

    /// Overwrite the snapshot with `snapshot`
    pub async fn save(&self, snapshot: String) -> TodoResult<WriteOutcome> {
        let generation = self.latest_write.get() + 1;
        self.latest_write.set(generation);

        let mut attempt = 1;
        loop {
            if self.latest_write.get() != generation {
                log::debug!("[REPO] Write #{generation} superseded before attempt {attempt}");
                return Ok(WriteOutcome::Superseded);
            }
            match self.storage.set(&self.key, &snapshot).await {
                Ok(()) => return Ok(WriteOutcome::Written),
                Err(err) if attempt < self.write_attempts => {
                    log::warn!(
                        "[REPO] Write #{generation} attempt {attempt}/{} failed: {err}",
                        self.write_attempts
                    );
                    pause(self.retry_delay_ms.saturating_mul(attempt)).await;
                    attempt += 1;
                }
                Err(err) if self.latest_write.get() != generation => {
                    log::debug!("[REPO] Write #{generation} failed after being superseded: {err}");
                    return Ok(WriteOutcome::Superseded);
                }
                Err(err) => {
                    return Err(TodoError::WriteExhausted {
                        key: self.key.clone(),
                        attempts: attempt,
                        source: Box::new(err),
                    })
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn pause(ms: u32) {
    if ms > 0 {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn pause(_ms: u32) {}
