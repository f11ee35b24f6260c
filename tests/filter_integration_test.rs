//! Integration tests for status filtering

mod common;

use common::{TodoListBuilder, visible_ids};
use todo_list::filters::{apply_filter, count_matching};
use todo_list::{Filter, Todo, TodoId};

fn create_todo(id: u64, completed: bool) -> Todo {
    let mut todo = Todo::new(TodoId(id), format!("Todo {}", id));
    todo.completed = completed;
    todo
}

#[test]
fn test_filter_integration_active() {
    let todos = vec![create_todo(10, false), create_todo(3, true), create_todo(7, false)];

    let filtered = apply_filter(&todos, Filter::Active);

    // Order follows the slice, not the ids
    let ids: Vec<u64> = filtered.iter().map(|t| t.id.0).collect();
    assert_eq!(ids, vec![10, 7]);
    assert!(filtered.iter().all(|t| !t.completed));
}

#[test]
fn test_filter_integration_completed() {
    let todos = vec![create_todo(1, true), create_todo(2, false), create_todo(3, true)];

    let filtered = apply_filter(&todos, Filter::Completed);

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|t| t.completed));
}

#[test]
fn test_filter_integration_complementary() {
    let todos: Vec<Todo> = (1..=20).map(|i| create_todo(i, i % 3 == 0 || i % 7 == 0)).collect();

    let active = apply_filter(&todos, Filter::Active);
    let completed = apply_filter(&todos, Filter::Completed);
    let all = apply_filter(&todos, Filter::All);

    assert_eq!(active.len() + completed.len(), all.len());
    assert_eq!(count_matching(&todos, Filter::Completed), completed.len());
    for todo in &todos {
        let in_active = active.iter().any(|t| t.id == todo.id);
        let in_completed = completed.iter().any(|t| t.id == todo.id);
        assert!(in_active != in_completed, "todo {} must be in exactly one view", todo.id);
    }
}

#[test]
fn test_filter_integration_parsed_filter_drives_controller() {
    let mut list = TodoListBuilder::seeded().with_todos(&["four"]).build();

    for (name, expected) in
        [("all", vec![1, 2, 3, 4]), ("active", vec![1, 3, 4]), ("completed", vec![2])]
    {
        list.set_filter(name.parse().expect("valid filter name"));
        assert_eq!(visible_ids(&list), expected, "filter {}", name);
    }
}

#[test]
fn test_filter_integration_view_tracks_toggles() {
    let mut list = TodoListBuilder::seeded().with_filter(Filter::Active).build();
    assert_eq!(visible_ids(&list), vec![1, 3]);

    list.toggle(TodoId(1));
    assert_eq!(visible_ids(&list), vec![3]);

    list.toggle(TodoId(2));
    assert_eq!(visible_ids(&list), vec![2, 3]);
}
