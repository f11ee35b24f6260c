//! Display sanitization for todo text.
//!
//! Todo text arrives from the keyboard or from `--add` arguments and is printed
//! back to the terminal, both by `list` and by the TUI. Escape sequences in that
//! text would move the cursor or recolor the screen, so every row goes through
//! [`sanitize_line`] first.

/// Make `text` safe to print as a single terminal row
///
/// - ANSI CSI sequences (`ESC [ ... letter`) are dropped
/// - tabs and line breaks become a single space
/// - every other control character is dropped
///
/// ```
/// use todo_list::utils::terminal::sanitize_line;
///
/// assert_eq!(sanitize_line("\x1b[31mBuy\x1b[0m\nmilk"), "Buy milk");
/// ```
pub fn sanitize_line(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(next_ch) = chars.next() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        match ch {
            '\t' | '\n' | '\r' => {
                if !result.ends_with(' ') {
                    result.push(' ');
                }
            }
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_line_strips_colors() {
        assert_eq!(sanitize_line("\x1b[31mRed task\x1b[0m done"), "Red task done");
    }

    #[test]
    fn test_sanitize_line_strips_cursor_movement() {
        assert_eq!(sanitize_line("\x1b[2J\x1b[HClean up"), "Clean up");
    }

    #[test]
    fn test_sanitize_line_drops_lone_escape() {
        assert_eq!(sanitize_line("a\x1bb"), "ab");
    }

    #[test]
    fn test_sanitize_line_flattens_line_breaks() {
        assert_eq!(sanitize_line("Line 1\nLine 2\r\nLine 3\tTabbed"), "Line 1 Line 2 Line 3 Tabbed");
    }

    #[test]
    fn test_sanitize_line_drops_bell_and_backspace() {
        assert_eq!(sanitize_line("Ring\x07 me\x08"), "Ring me");
    }

    #[test]
    fn test_sanitize_line_plain_and_unicode() {
        assert_eq!(sanitize_line("Plain task"), "Plain task");
        assert_eq!(sanitize_line("Say hi 👋 \x1b[1mloudly\x1b[0m"), "Say hi 👋 loudly");
        assert_eq!(sanitize_line(""), "");
    }
}
