use tracing::debug;

use crate::filters::{Filter, apply_filter, count_matching};
use crate::models::{Todo, TodoId};

/// Items present when the widget starts
const SEED_ITEMS: [(&str, bool); 3] =
    [("Learn React", false), ("Build a todo app", true), ("Practice coding", false)];

#[derive(Debug, Clone)]
pub struct TodoList {
    items: Vec<Todo>,
    draft: String,
    filter: Filter,
    // Only ever grows, so deleted ids are never handed out again
    next_id: u64,
}

impl TodoList {
    /// Controller seeded with the three starting items (ids 1-3, item 2 completed),
    /// an empty draft and the `All` filter
    pub fn new() -> Self {
        let items = SEED_ITEMS
            .iter()
            .zip(1u64..)
            .map(|(&(text, completed), id)| {
                let mut todo = Todo::new(TodoId(id), text);
                todo.completed = completed;
                todo
            })
            .collect();

        Self::from_items(items)
    }

    /// Controller without any items
    pub fn empty() -> Self {
        Self::from_items(Vec::new())
    }

    fn from_items(items: Vec<Todo>) -> Self {
        let next_id = items.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        Self { items, draft: String::new(), filter: Filter::default(), next_id }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Replace the draft unconditionally
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commit the trimmed draft as a new active item at the end of the list.
    ///
    /// Returns the new id, or `None` when the draft is blank; in that case the
    /// draft is left as it was.
    pub fn add(&mut self) -> Option<TodoId> {
        let text = self.draft.trim();
        if text.is_empty() {
            debug!("ignoring add with blank draft");
            return None;
        }

        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.items.push(Todo::new(id, text));
        self.draft.clear();

        debug!(%id, total = self.items.len(), "added todo");
        Some(id)
    }

    /// Flip `completed` on the matching item. Unknown ids are ignored.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                debug!(%id, completed = todo.completed, "toggled todo");
                true
            }
            None => {
                debug!(%id, "ignoring toggle of unknown todo");
                false
            }
        }
    }

    /// Remove the matching item, keeping the rest in order. Unknown ids are ignored.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        let removed = self.items.len() < before;

        if removed {
            debug!(%id, total = self.items.len(), "deleted todo");
        } else {
            debug!(%id, "ignoring delete of unknown todo");
        }
        removed
    }

    pub fn set_filter(&mut self, filter: Filter) {
        debug!(%filter, "filter changed");
        self.filter = filter;
    }

    /// Items passing the current filter, in list order
    pub fn visible_items(&self) -> Vec<&Todo> {
        apply_filter(&self.items, self.filter)
    }

    pub fn active_count(&self) -> usize {
        count_matching(&self.items, Filter::Active)
    }

    pub fn completed_count(&self) -> usize {
        count_matching(&self.items, Filter::Completed)
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}
