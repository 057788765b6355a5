//! Todo Store
//!
//! The state/persistence container. Uses reactive_stores for fine-grained
//! reactivity and mirrors every mutation to the snapshot repository.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::TodoConfig;
use crate::error::{TodoError, TodoResult};
use crate::models::{Entry, EntryId};
use crate::repository::{settle_load, LoadSource, SnapshotRepository, WriteOutcome};
use crate::storage::default_storage;
use crate::todo_list::TodoList;

/// Lifecycle of the one-time load
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Uninitialized,
    /// Load in flight; still uninitialized from the caller's point of view
    Loading,
    Ready,
}

/// Reactive todo state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Canonical in-memory list
    pub list: TodoList,
    pub phase: LoadPhase,
    /// Last failed write, cleared by the next successful one
    pub write_error: Option<String>,
}

/// Handle to the todo container, provided via context
#[derive(Clone, Copy)]
pub struct TodoStore {
    state: Store<TodoState>,
    repo: StoredValue<Rc<SnapshotRepository>, LocalStorage>,
}

impl TodoStore {
    pub fn new(repo: SnapshotRepository) -> Self {
        Self {
            state: Store::new(TodoState::default()),
            repo: StoredValue::new_local(Rc::new(repo)),
        }
    }

    /// Container over the platform's default storage
    pub fn open(config: &TodoConfig) -> Self {
        Self::new(SnapshotRepository::new(default_storage(), config))
    }

    /// Current entries, in display order (tracked)
    pub fn todo_list(&self) -> Vec<Entry> {
        self.state.list().read().entries().to_vec()
    }

    pub fn texts(&self) -> Vec<String> {
        self.state.list().read().texts()
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.phase().get()
    }

    pub fn write_error(&self) -> Option<String> {
        self.state.write_error().get()
    }

    /// Append `text` as the final entry
    pub fn add_todo_list(&self, text: impl Into<String>) -> EntryId {
        let id = self.state.list().write().push(text);
        self.persist();
        id
    }

    /// Remove the entry at `position`; out-of-range positions are ignored
    pub fn remove_todo_list(&self, position: usize) -> TodoResult<Entry> {
        let len = self.state.list().read_untracked().len();
        if position >= len {
            let err = TodoError::PositionOutOfRange { position, len };
            log::error!("[STORE] remove_todo_list ignored: {err}");
            return Err(err);
        }
        let removed = self.state.list().write().remove_at(position)?;
        self.persist();
        Ok(removed)
    }

    /// Remove the entry with `id`; unknown ids are ignored
    pub fn remove_todo(&self, id: EntryId) -> TodoResult<Entry> {
        let position = self.state.list().read_untracked().position_of(id);
        if position.is_none() {
            let err = TodoError::UnknownEntry(id);
            log::error!("[STORE] remove_todo ignored: {err}");
            return Err(err);
        }
        let removed = self.state.list().write().remove(id)?;
        self.persist();
        Ok(removed)
    }

    /// Start the one-time load of the persisted snapshot.
    ///
    /// Later calls are ignored. Failures are logged, never propagated.
    pub fn init(&self) {
        if self.state.phase().get_untracked() != LoadPhase::Uninitialized {
            log::debug!("[STORE] init already ran, ignoring");
            return;
        }
        *self.state.phase().write() = LoadPhase::Loading;

        let repo = self.repo.get_value();
        let store = *self;
        spawn_local(async move {
            let loaded = repo.load().await;
            store.finish_load(loaded);
        });
    }

    fn finish_load(&self, loaded: TodoResult<Option<TodoList>>) {
        let report = settle_load(&mut self.state.list().write(), loaded);
        match &report.source {
            LoadSource::Snapshot(count) => log::info!("[STORE] Loaded {count} entries"),
            LoadSource::Missing => log::info!("[STORE] No saved list yet"),
            LoadSource::Failed(reason) => {
                log::warn!("[STORE] Could not load saved list, starting empty: {reason}")
            }
        }
        *self.state.phase().write() = LoadPhase::Ready;

        if report.needs_write_back() {
            log::debug!("[STORE] Writing back {} entries added during load", report.kept_local);
            self.persist();
        }
    }

    /// Issue a snapshot write for the current list.
    ///
    /// Deferred until loaded, so an unread snapshot is never overwritten.
    fn persist(&self) {
        if self.state.phase().get_untracked() != LoadPhase::Ready {
            log::debug!("[STORE] Not loaded yet, write deferred");
            return;
        }
        let snapshot = self.state.list().read_untracked().to_snapshot();
        let snapshot = match snapshot {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.record_write(Err(err));
                return;
            }
        };

        let repo = self.repo.get_value();
        let store = *self;
        spawn_local(async move {
            let result = repo.save(snapshot).await;
            store.record_write(result);
        });
    }

    fn record_write(&self, result: TodoResult<WriteOutcome>) {
        match result {
            Ok(WriteOutcome::Written) => {
                if self.state.write_error().get_untracked().is_some() {
                    *self.state.write_error().write() = None;
                }
            }
            Ok(WriteOutcome::Superseded) => {}
            Err(err) => {
                log::error!("[STORE] Failed to save todo list: {err}");
                *self.state.write_error().write() = Some(err.to_string());
            }
        }
    }
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}
