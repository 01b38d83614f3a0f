//! "Are you ready?" panel: choose between the form and a rating

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout;
use crate::theme::styles;

pub struct AreYouReadyPanel {
    feedback_enabled: bool,
}

impl AreYouReadyPanel {
    pub fn new(feedback_enabled: bool) -> Self {
        Self { feedback_enabled }
    }
}

impl Widget for AreYouReadyPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = layout::centered(area, 48, 8);
        let block = styles::glass_block(true);
        let inner = block.inner(card);
        block.render(card, buf);

        let mut lines = vec![
            Line::from(Span::styled("Are you ready?", styles::title())),
            Line::default(),
            Line::from(Span::styled(
                "Leave your details and we'll be in touch.",
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(Span::styled(" Fill in the form  [Enter] ", styles::focused_selected())),
        ];
        if self.feedback_enabled {
            lines.push(Line::from(Span::styled(
                " Rate your visit  [r] ",
                styles::accent(),
            )));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
