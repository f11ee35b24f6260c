//! TUI application state and event handling.
//!
//! The [`App`] is the presentation layer around a [`TodoList`]. It owns the
//! controller, turns key [`Action`]s into controller operations, and re-reads the
//! visible items and counts before every draw. It keeps only view state of its
//! own:
//!
//! - **Selection**: index into the currently visible items, clamped after each mutation
//! - **Status messages**: transient confirmation of the last change
//! - **Dirty state tracking**: redraw only when something changed
//!
//! # Example
//!
//! ```rust,ignore
//! let mut app = App::new(TodoList::new());
//! app.run(&mut terminal)?;
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, info};

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::controller::TodoList;
use crate::filters::Filter;
use crate::models::TodoId;
use crate::utils::sanitize_line;

/// How long a status message stays in the status bar (milliseconds)
const STATUS_DURATION_MS: u64 = 3000;

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

pub struct App {
    list: TodoList,
    selected_idx: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(list: TodoList) -> Self {
        Self {
            list,
            selected_idx: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!(total = self.list.total_count(), filter = %self.list.filter(), "starting todo UI");

        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let visible = self.list.visible_items();
                terminal.draw(|f| {
                    let state = RenderState {
                        draft: self.list.draft(),
                        filter: self.list.filter(),
                        visible: &visible,
                        selected_idx: self.selected_idx,
                        active_count: self.list.active_count(),
                        completed_count: self.list.completed_count(),
                        total_count: self.list.total_count(),
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        info!(total = self.list.total_count(), "todo UI closed");
        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearDraft => {
                if self.list.draft().is_empty() {
                    self.should_quit = true;
                } else {
                    self.list.set_draft(String::new());
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::Submit => self.submit(),
            Action::ToggleSelected => self.toggle_selected(),
            Action::DeleteSelected => self.delete_selected(),
            Action::NextFilter => self.set_filter(self.list.filter().next()),
            Action::PreviousFilter => self.set_filter(self.list.filter().previous()),
            Action::SetFilter(filter) => self.set_filter(filter),
            Action::InsertChar(c) => self.insert_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::None => {}
        }
    }

    fn visible_len(&self) -> usize {
        self.list.visible_items().len()
    }

    fn selected_id(&self) -> Option<TodoId> {
        self.list.visible_items().get(self.selected_idx).map(|todo| todo.id)
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.visible_len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    /// Keep the selection inside the visible items after a mutation
    fn clamp_selection(&mut self) {
        self.selected_idx = self.selected_idx.min(self.visible_len().saturating_sub(1));
    }

    fn insert_char(&mut self, c: char) {
        let mut draft = self.list.draft().to_string();
        draft.push(c);
        self.list.set_draft(draft);
        self.needs_redraw = true;
    }

    fn delete_char(&mut self) {
        let mut draft = self.list.draft().to_string();
        if draft.pop().is_some() {
            self.list.set_draft(draft);
            self.needs_redraw = true;
        }
    }

    fn submit(&mut self) {
        let Some(id) = self.list.add() else {
            return;
        };

        // Select the new item when the current filter shows it
        if let Some(idx) = self.list.visible_items().iter().position(|todo| todo.id == id) {
            self.selected_idx = idx;
        }
        let text = self.list.get(id).map(|todo| sanitize_line(&todo.text)).unwrap_or_default();
        self.set_status(format!("✓ Added \"{}\"", text), STATUS_DURATION_MS);
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };

        if self.list.toggle(id) {
            let completed = self.list.get(id).is_some_and(|todo| todo.completed);
            self.clamp_selection();
            let verb = if completed { "Completed" } else { "Reopened" };
            self.set_status(format!("✓ {} todo {}", verb, id), STATUS_DURATION_MS);
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };

        if self.list.delete(id) {
            self.clamp_selection();
            self.set_status(format!("✓ Deleted todo {}", id), STATUS_DURATION_MS);
        }
    }

    fn set_filter(&mut self, filter: Filter) {
        if self.list.filter() != filter {
            self.list.set_filter(filter);
            self.selected_idx = 0;
            self.needs_redraw = true;
            debug!(%filter, visible = self.visible_len(), "switched filter tab");
        }
    }
}
