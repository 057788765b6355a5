//! In-memory key-value store. Clones share the same map.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::KeyValueStore;
use crate::error::TodoResult;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing the async API
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.borrow_mut().insert(key.into(), value.into());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

#[async_trait(?Send)]
impl KeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> TodoResult<Option<String>> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("todoList").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_and_clones_share_state() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.set("todoList", "[\"a\"]").await.unwrap();
        storage.set("todoList", "[\"b\"]").await.unwrap();

        assert_eq!(handle.get("todoList").await.unwrap().as_deref(), Some("[\"b\"]"));
    }
}
