use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::filters::Filter;

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ClearDraft,
    MoveUp,
    MoveDown,
    Submit,
    ToggleSelected,
    DeleteSelected,
    NextFilter,
    PreviousFilter,
    SetFilter(Filter),
    InsertChar(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ClearDraft,

        // Selection (arrows or Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,

        // Item operations
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::ToggleSelected,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::DeleteSelected,
        (KeyCode::Delete, _) => Action::DeleteSelected,

        // Filter tabs
        (KeyCode::Tab, _) => Action::NextFilter,
        (KeyCode::BackTab, _) => Action::PreviousFilter,
        (KeyCode::F(1), _) => Action::SetFilter(Filter::All),
        (KeyCode::F(2), _) => Action::SetFilter(Filter::Active),
        (KeyCode::F(3), _) => Action::SetFilter(Filter::Completed),

        // Draft input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InsertChar(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_action() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c), Action::Quit);
    }

    #[test]
    fn test_clear_draft_action() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(key_to_action(esc), Action::ClearDraft);
    }

    #[test]
    fn test_selection_keys() {
        let ctrl_p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_p), Action::MoveUp);

        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_n), Action::MoveDown);

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(key_to_action(up), Action::MoveUp);

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(key_to_action(down), Action::MoveDown);
    }

    #[test]
    fn test_enter_submits() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(key_to_action(enter), Action::Submit);
    }

    #[test]
    fn test_item_operation_keys() {
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_t), Action::ToggleSelected);

        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_d), Action::DeleteSelected);

        let delete = KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(key_to_action(delete), Action::DeleteSelected);
    }

    #[test]
    fn test_filter_keys() {
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(key_to_action(tab), Action::NextFilter);

        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_to_action(back_tab), Action::PreviousFilter);

        let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(key_to_action(f1), Action::SetFilter(Filter::All));

        let f3 = KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE);
        assert_eq!(key_to_action(f3), Action::SetFilter(Filter::Completed));
    }

    #[test]
    fn test_draft_input() {
        let char_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_to_action(char_a), Action::InsertChar('a'));

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key_to_action(space), Action::InsertChar(' '));

        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(key_to_action(backspace), Action::DeleteChar);
    }

    #[test]
    fn test_draft_input_with_shift() {
        let char_a_shift = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_to_action(char_a_shift), Action::InsertChar('A'));
    }

    #[test]
    fn test_plain_t_and_d_are_text() {
        let t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(key_to_action(t), Action::InsertChar('t'));

        let d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(key_to_action(d), Action::InsertChar('d'));
    }

    #[test]
    fn test_unknown_key() {
        let unknown = KeyEvent::new(KeyCode::F(9), KeyModifiers::NONE);
        assert_eq!(key_to_action(unknown), Action::None);
    }
}
