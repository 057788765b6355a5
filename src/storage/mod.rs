//! Key-Value Storage
//!
//! The durable store behind the snapshot. Only `get` and `set` are used.
//! Implementations can use the webview's localStorage, memory, etc.

use async_trait::async_trait;

use crate::error::TodoResult;

mod browser;
mod memory;

pub use browser::BrowserStorage;
pub use memory::MemoryStorage;

/// Async string key-value store
///
/// Futures are not `Send`: browser storage handles live on the UI thread.
#[async_trait(?Send)]
pub trait KeyValueStore {
    /// Read the value under `key`; `Ok(None)` when absent
    async fn get(&self, key: &str) -> TodoResult<Option<String>>;

    /// Overwrite the value under `key`
    async fn set(&self, key: &str, value: &str) -> TodoResult<()>;
}

/// Browser localStorage when available, otherwise memory.
pub fn default_storage() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        match BrowserStorage::open() {
            Ok(storage) => return Box::new(storage),
            Err(err) => log::warn!("[STORAGE] {err}; falling back to memory, changes will not survive a reload"),
        }
    }
    Box::new(MemoryStorage::new())
}
