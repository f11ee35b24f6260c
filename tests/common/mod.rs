//! Shared test utilities for integration tests
#![allow(dead_code)]

use todo_list::{Filter, TodoId, TodoList};

/// Drafts that trim to nothing
pub const BLANK_DRAFTS: &[&str] = &["", " ", "   ", "\t", "\n", " \t\r\n ", "\u{a0}", "\u{2003}"];

/// Drafts that survive trimming, with the text each should produce
pub const NON_BLANK_DRAFTS: &[(&str, &str)] = &[
    ("Write spec", "Write spec"),
    ("  padded  ", "padded"),
    ("\tTabbed\n", "Tabbed"),
    ("inner   spaces kept", "inner   spaces kept"),
    ("x", "x"),
    ("日本語のタスク", "日本語のタスク"),
    (" 🚀 launch ", "🚀 launch"),
];

/// Builder for controllers in a known state
pub struct TodoListBuilder {
    list: TodoList,
}

impl TodoListBuilder {
    /// Start from the seeded list
    pub fn seeded() -> Self {
        Self { list: TodoList::new() }
    }

    /// Start from a list without items
    pub fn empty() -> Self {
        Self { list: TodoList::empty() }
    }

    /// Add one todo per text
    pub fn with_todos(mut self, texts: &[&str]) -> Self {
        for text in texts {
            self.list.set_draft(*text);
            self.list.add().expect("builder texts must not be blank");
        }
        self
    }

    pub fn with_toggled(mut self, ids: &[u64]) -> Self {
        for id in ids {
            self.list.toggle(TodoId(*id));
        }
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.list.set_filter(filter);
        self
    }

    pub fn build(self) -> TodoList {
        self.list
    }
}

pub fn ids(list: &TodoList) -> Vec<u64> {
    list.items().iter().map(|t| t.id.0).collect()
}

pub fn visible_ids(list: &TodoList) -> Vec<u64> {
    list.visible_items().iter().map(|t| t.id.0).collect()
}

/// (id, text, completed) for every item, in order
pub fn snapshot(list: &TodoList) -> Vec<(u64, String, bool)> {
    list.items().iter().map(|t| (t.id.0, t.text.clone(), t.completed)).collect()
}
