//! Header bar widget
//!
//! Shows the application title and the active panel's title.

use kiosk_core::Screen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Main header showing app title and the visible screen
pub struct MainHeader {
    screen: Option<Screen>,
}

impl MainHeader {
    pub fn new(screen: Option<Screen>) -> Self {
        Self { screen }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::styled(" Kiosk ", styles::accent_bold())];
        if let Some(screen) = self.screen {
            spans.push(Span::styled("│ ", styles::text_muted()));
            spans.push(Span::styled(screen.title(), styles::title()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
