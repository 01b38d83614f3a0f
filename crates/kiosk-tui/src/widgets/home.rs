//! Home panel: the attract screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout;
use crate::theme::styles;

pub struct HomePanel;

impl Widget for HomePanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = layout::centered(area, 44, 7);
        let block = styles::glass_block(true);
        let inner = block.inner(card);
        block.render(card, buf);

        let lines = vec![
            Line::from(Span::styled("Welcome!", styles::title())),
            Line::default(),
            Line::from(Span::styled(
                "Discover what we do in a few minutes.",
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(Span::styled(" Explore  [Enter] ", styles::focused_selected())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
