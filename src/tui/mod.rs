// TUI module: terminal presentation layer for the todo list
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::controller::TodoList;

/// Run the interactive TUI until the user quits
pub fn run_interactive(list: TodoList) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(list);

    let res = app.run(manager.terminal_mut());

    // Restore even when the loop failed, then report the loop's error first
    let restored = manager.restore();
    res.and(restored)
}
