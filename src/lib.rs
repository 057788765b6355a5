//! Todo List UI
//!
//! Layered, leaf first:
//! - models / todo_list: entries and the ordered list
//! - storage: key-value port (localStorage, memory)
//! - repository: the persisted snapshot
//! - store: reactive container shared via context
//! - list_view / components: what gets rendered

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod list_view;
pub mod logging;
pub mod models;
pub mod repository;
pub mod storage;
pub mod store;
pub mod todo_list;

pub use app::App;
pub use config::TodoConfig;
pub use error::{TodoError, TodoResult};
pub use models::{Entry, EntryId};
pub use store::{use_todo_store, LoadPhase, TodoStore};
pub use todo_list::TodoList;
