//! localStorage adapter.

use async_trait::async_trait;
use web_sys::Storage;

use super::KeyValueStore;
use crate::error::{TodoError, TodoResult};

pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    /// Open `window.localStorage`.
    ///
    /// Fails without a window, or when the webview denies storage access.
    pub fn open() -> TodoResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| TodoError::StorageUnavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| TodoError::StorageUnavailable(format!("{e:?}")))?
            .ok_or_else(|| TodoError::StorageUnavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl KeyValueStore for BrowserStorage {
    async fn get(&self, key: &str) -> TodoResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| TodoError::Read {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    async fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        // Quota errors surface here
        self.storage.set_item(key, value).map_err(|e| TodoError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }
}
