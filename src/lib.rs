//! Todo List - a small in-memory todo list with a terminal UI
//!
//! The heart of the crate is [`TodoList`], the list controller: an ordered
//! collection of todos, the draft for the next one, and the active status filter.
//! It supports:
//!
//! - Adding the trimmed draft as a new todo (blank drafts are ignored)
//! - Toggling and deleting todos by id (unknown ids are ignored)
//! - Deriving the visible todos for the `All` / `Active` / `Completed` filter
//! - Active, completed and total counts
//!
//! The `tui` module renders a list with ratatui and forwards key presses back into
//! the controller; the `cli` module wires both to the `todo-list` binary.
//!
//! # Example
//!
//! ```
//! use todo_list::{Filter, TodoList};
//!
//! let mut list = TodoList::new();
//! list.set_draft("Write spec");
//! let id = list.add().expect("draft is not blank");
//! list.toggle(id);
//! list.set_filter(Filter::Completed);
//!
//! let visible: Vec<u64> = list.visible_items().iter().map(|t| t.id.0).collect();
//! assert_eq!(visible, vec![2, id.0]);
//! ```

pub mod cli;
pub mod controller;
pub mod filters;
pub mod models;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use controller::TodoList;
pub use filters::Filter;
pub use models::{Todo, TodoId};
