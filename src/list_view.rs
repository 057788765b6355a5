//! List View Model
//!
//! What the todo list renders: one row per entry, or a single placeholder
//! when there are none.

use crate::models::{Entry, EntryId};

/// A rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    /// Identity-based key, stable when other rows are removed
    pub key: String,
    pub id: EntryId,
    pub position: usize,
    pub text: String,
}

impl TodoRow {
    fn new(position: usize, entry: &Entry) -> Self {
        Self {
            key: row_key(entry.id),
            id: entry.id,
            position,
            text: entry.text.clone(),
        }
    }
}

pub fn row_key(id: EntryId) -> String {
    format!("todo-{id}")
}

/// Lazy rows over `entries`; call again to restart
pub fn rows(entries: &[Entry]) -> impl Iterator<Item = TodoRow> + '_ {
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| TodoRow::new(position, entry))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    Placeholder,
    Rows(Vec<TodoRow>),
}

impl ListContent {
    pub fn from_entries(entries: &[Entry]) -> Self {
        if entries.is_empty() {
            ListContent::Placeholder
        } else {
            ListContent::Rows(rows(entries).collect())
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ListContent::Placeholder)
    }

    /// The placeholder should take the whole region, not shrink to content
    pub fn fills_available_space(&self) -> bool {
        self.is_placeholder()
    }

    pub fn rows(&self) -> Vec<TodoRow> {
        match self {
            ListContent::Placeholder => Vec::new(),
            ListContent::Rows(rows) => rows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo_list::TodoList;

    #[test]
    fn test_empty_list_renders_placeholder_only() {
        let content = ListContent::from_entries(&[]);
        assert!(content.is_placeholder());
        assert!(content.fills_available_space());
        assert!(content.rows().is_empty());
    }

    #[test]
    fn test_list_emptied_by_removal_renders_placeholder() {
        let mut list = TodoList::from_texts(["a"]);
        list.remove_at(0).unwrap();
        assert_eq!(ListContent::from_entries(list.entries()), ListContent::Placeholder);
    }

    #[test]
    fn test_one_row_per_entry_in_order() {
        let list = TodoList::from_texts(["buy milk", "walk dog"]);
        let content = ListContent::from_entries(list.entries());
        assert!(!content.fills_available_space());

        let rows = content.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "buy milk");
        assert_eq!(rows[0].position, 0);
        assert_eq!(rows[1].text, "walk dog");
        assert_eq!(rows[1].position, 1);
        assert_eq!(rows[1].key, format!("todo-{}", list.entries()[1].id));
    }

    #[test]
    fn test_rows_restart() {
        let list = TodoList::from_texts(["a", "b", "c"]);
        let first: Vec<_> = rows(list.entries()).collect();
        let second: Vec<_> = rows(list.entries()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_keys_survive_removal_of_other_rows() {
        let mut list = TodoList::from_texts(["a", "b", "c"]);
        let before: Vec<_> = rows(list.entries()).collect();
        list.remove_at(0).unwrap();
        let after: Vec<_> = rows(list.entries()).collect();

        assert_eq!(after[0].key, before[1].key);
        assert_eq!(after[0].position, 0);
        assert_eq!(after[1].key, before[2].key);
    }
}
