//! Todo List
//!
//! Ordered entries plus the snapshot codec. Insertion order is display
//! order is persistence order.

use crate::error::{TodoError, TodoResult};
use crate::models::{Entry, EntryId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    entries: Vec<Entry>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from texts, assigning fresh ids
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: texts.into_iter().map(Entry::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn texts(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.text.clone()).collect()
    }

    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Append a new final entry. No validation, no de-duplication.
    pub fn push(&mut self, text: impl Into<String>) -> EntryId {
        let entry = Entry::new(text);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Remove the entry at `position`, shifting later entries left.
    ///
    /// Out-of-range positions leave the list untouched.
    pub fn remove_at(&mut self, position: usize) -> TodoResult<Entry> {
        if position >= self.entries.len() {
            return Err(TodoError::PositionOutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(position))
    }

    pub fn remove(&mut self, id: EntryId) -> TodoResult<Entry> {
        let position = self.position_of(id).ok_or(TodoError::UnknownEntry(id))?;
        Ok(self.entries.remove(position))
    }

    /// Put `loaded` in front of whatever is in memory now.
    ///
    /// Returns the number of in-memory entries that were kept behind the
    /// loaded ones.
    pub fn absorb_loaded(&mut self, loaded: TodoList) -> usize {
        let local = std::mem::replace(&mut self.entries, loaded.entries);
        let kept = local.len();
        self.entries.extend(local);
        kept
    }

    /// Serialize as a JSON array of texts
    pub fn to_snapshot(&self) -> TodoResult<String> {
        let texts: Vec<&str> = self.entries.iter().map(|entry| entry.text.as_str()).collect();
        Ok(serde_json::to_string(&texts)?)
    }

    pub fn from_snapshot(raw: &str) -> TodoResult<Self> {
        let texts: Vec<String> = serde_json::from_str(raw)?;
        Ok(Self::from_texts(texts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_call_order() {
        let mut list = TodoList::new();
        for text in ["t1", "t2", "t3", "t2", ""] {
            list.push(text);
        }
        assert_eq!(list.texts(), vec!["t1", "t2", "t3", "t2", ""]);
    }

    #[test]
    fn test_remove_at_shifts_left() {
        let mut list = TodoList::from_texts(["a", "b", "c", "d"]);
        let removed = list.remove_at(1).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(list.len(), 3);
        assert_eq!(list.texts(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_at_every_position() {
        let original = TodoList::from_texts(["a", "b", "c"]);
        for p in 0..original.len() {
            let mut list = original.clone();
            list.remove_at(p).unwrap();
            let mut expected = original.texts();
            expected.remove(p);
            assert_eq!(list.texts(), expected);
        }
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut list = TodoList::from_texts(["a"]);
        let err = list.remove_at(1).unwrap_err();
        assert!(matches!(err, TodoError::PositionOutOfRange { position: 1, len: 1 }));
        assert_eq!(list.texts(), vec!["a"]);

        let mut empty = TodoList::new();
        assert!(empty.remove_at(0).is_err());
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = TodoList::new();
        list.push("keep");
        let id = list.push("drop");
        list.push("keep too");

        assert_eq!(list.remove(id).unwrap().text, "drop");
        assert_eq!(list.texts(), vec!["keep", "keep too"]);
        assert!(matches!(list.remove(id), Err(TodoError::UnknownEntry(_))));
    }

    #[test]
    fn test_add_add_remove_scenario() {
        let mut list = TodoList::new();
        list.push("buy milk");
        assert_eq!(list.texts(), vec!["buy milk"]);
        list.push("walk dog");
        assert_eq!(list.texts(), vec!["buy milk", "walk dog"]);
        list.remove_at(0).unwrap();
        assert_eq!(list.texts(), vec!["walk dog"]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let list = TodoList::from_texts(["a", "b \"quoted\"", "", "유니코드"]);
        let raw = list.to_snapshot().unwrap();
        let restored = TodoList::from_snapshot(&raw).unwrap();
        assert_eq!(restored.texts(), list.texts());
    }

    #[test]
    fn test_snapshot_format_is_string_array() {
        let list = TodoList::from_texts(["a", "b"]);
        assert_eq!(list.to_snapshot().unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_malformed_snapshot_is_error() {
        for raw in ["not json", "{\"a\":1}", "[1,2]", "null"] {
            assert!(
                matches!(TodoList::from_snapshot(raw), Err(TodoError::Snapshot(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_absorb_loaded_puts_local_after_loaded() {
        let mut list = TodoList::new();
        list.push("added early");
        let kept = list.absorb_loaded(TodoList::from_texts(["a", "b"]));
        assert_eq!(kept, 1);
        assert_eq!(list.texts(), vec!["a", "b", "added early"]);
    }
}
