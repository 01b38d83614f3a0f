//! Screen layout definitions for the TUI
//!
//! Every kiosk screen shares the same frame: a header naming the panel,
//! the panel body, and a one-line status bar.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (title + active panel)
    pub header: Rect,

    /// The active panel
    pub body: Rect,

    /// Delivery diagnostics and key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Panel body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Center a box of at most `width` x `height` inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_small_terminal_keeps_status_line() {
        let area = Rect::new(0, 0, 40, 8);
        let layout = create(area);

        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.body.height, 4);
    }

    #[test]
    fn test_centered_box() {
        let area = Rect::new(0, 0, 80, 24);
        let inner = centered(area, 40, 10);

        assert_eq!(inner.width, 40);
        assert_eq!(inner.height, 10);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 7);
    }

    #[test]
    fn test_centered_box_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 5);
        let inner = centered(area, 60, 20);

        assert_eq!(inner.width, 30);
        assert_eq!(inner.height, 5);
    }
}
