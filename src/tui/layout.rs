use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Single-column layout, top to bottom
pub struct AppLayout {
    pub header_area: Rect,
    pub input_area: Rect,
    pub tabs_area: Rect,
    pub stats_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the stacked layout:
    /// - Header: title and subtitle (2 rows)
    /// - Input box: bordered draft field (3 rows)
    /// - Filter tabs: bordered (3 rows)
    /// - Stats row (1 row)
    /// - Todo list: everything left over
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Length(3), // Input
                Constraint::Length(3), // Filter tabs
                Constraint::Length(1), // Stats
                Constraint::Min(3),    // Todo list (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            input_area: chunks[1],
            tabs_area: chunks[2],
            stats_area: chunks[3],
            list_area: chunks[4],
            status_area: chunks[5],
        }
    }
}
