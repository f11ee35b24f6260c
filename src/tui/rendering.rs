use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs};

use super::app::StatusMessage;
use super::layout::AppLayout;
use super::timestamps::format_created;
use crate::filters::Filter;
use crate::models::Todo;
use crate::utils::sanitize_line;

const ACCENT: Color = Color::Rgb(147, 51, 234); // Purple
const DONE: Color = Color::Rgb(16, 185, 129); // Emerald
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

const PLACEHOLDER: &str = "What needs to be done?";

/// Everything the UI shows, re-read from the controller before every draw
pub struct RenderState<'a> {
    pub draft: &'a str,
    pub filter: Filter,
    pub visible: &'a [&'a Todo],
    pub selected_idx: usize,
    pub active_count: usize,
    pub completed_count: usize,
    pub total_count: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header_area);
    render_input(frame, layout.input_area, state.draft);
    render_filter_tabs(frame, layout.tabs_area, state.filter);
    render_stats(frame, layout.stats_area, state);
    if state.visible.is_empty() {
        render_empty_state(frame, layout.list_area, state.filter);
    } else {
        render_todo_list(frame, layout.list_area, state.visible, state.selected_idx);
    }
    render_status_bar(frame, layout.status_area, state.status_message);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Todo App",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Stay organized, stay productive", Style::default().fg(MUTED))),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_input(frame: &mut Frame, area: Rect, draft: &str) {
    let displayed = sanitize_line(draft);
    let line = if displayed.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(displayed.as_str())
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" New todo (Enter to add) "),
    );
    frame.render_widget(paragraph, area);

    // Cursor sits after the draft, clamped inside the border
    if area.width > 2 && area.height > 2 {
        let typed = u16::try_from(cursor_column(&displayed)).unwrap_or(u16::MAX);
        let x = area.x + 1 + typed.min(area.width - 3);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Terminal cells taken by the displayed draft; wide characters count twice
fn cursor_column(displayed: &str) -> usize {
    Line::from(displayed).width()
}

fn render_filter_tabs(frame: &mut Frame, area: Rect, filter: Filter) {
    let selected = Filter::ALL.iter().position(|f| *f == filter).unwrap_or(0);

    let tabs = Tabs::new(Filter::ALL.iter().map(|f| f.label()))
        .select(selected)
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Filter (Tab) "),
        );

    frame.render_widget(tabs, area);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &RenderState) {
    let line = Line::from(vec![
        Span::raw(format!(" {} active", state.active_count)),
        Span::styled("  ·  ", Style::default().fg(MUTED)),
        Span::raw(format!("{} completed", state.completed_count)),
        Span::styled("  ·  ", Style::default().fg(MUTED)),
        Span::raw(format!("{} total", state.total_count)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn todo_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(" Todos ")
}

fn render_todo_list(frame: &mut Frame, area: Rect, todos: &[&Todo], selected_idx: usize) {
    let items: Vec<ListItem> = todos
        .iter()
        .map(|todo| {
            let (marker, marker_style) = if todo.completed {
                ("(✓) ", Style::default().fg(DONE).add_modifier(Modifier::BOLD))
            } else {
                ("( ) ", Style::default().fg(MUTED))
            };

            let text_style = if todo.completed {
                Style::default().fg(MUTED).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(BRIGHT)
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(sanitize_line(&todo.text), text_style),
                Span::styled(
                    format!("  {}", format_created(&todo.created_at)),
                    Style::default().fg(MUTED).add_modifier(Modifier::DIM),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(todo_block())
        .highlight_style(Style::default().bg(Color::Rgb(39, 39, 42)).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(selected_idx));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_empty_state(frame: &mut Frame, area: Rect, filter: Filter) {
    let lines = vec![
        Line::from(""),
        Line::from("📝"),
        Line::from(Span::styled("No todos here", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(filter.empty_message(), Style::default().fg(MUTED))),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(todo_block());
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, status_message: Option<&StatusMessage>) {
    let (status_text, style) = if let Some(message) = status_message {
        (format!(" {} ", message.text), Style::default().fg(DONE).bg(BAR_BG))
    } else {
        (
            " Enter: add | Ctrl+T: toggle | Ctrl+D: delete | Tab: filter | Esc: clear | Ctrl+C: quit "
                .to_string(),
            Style::default().fg(BRIGHT).bg(BAR_BG),
        )
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
