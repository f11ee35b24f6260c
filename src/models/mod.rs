//! Data models for the todo list.
//!
//! - [`Todo`] - A single task record with identity, text and completion status
//! - [`TodoId`] - Identity of a todo item, unique within one list
//!
//! The view selector [`Filter`](crate::filters::Filter) lives in the `filters` module.

pub mod todo;

pub use todo::{Todo, TodoId};
