//! List controller: the todo collection, the input draft and the active filter.
//!
//! All state changes go through [`TodoList`]. Every operation is total: an empty
//! draft or an unknown id turns the call into a no-op instead of an error. Mutations
//! report whether anything changed so the caller knows when to re-read
//! [`TodoList::visible_items`] and the counts.

pub mod list;

pub use list::TodoList;
