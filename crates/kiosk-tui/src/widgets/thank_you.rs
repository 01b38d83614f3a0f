//! Thank-you panel shown after a form or rating is accepted

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout;
use crate::theme::styles;

pub struct ThankYouPanel {
    /// Configured idle timeout, in seconds
    auto_return: Option<u64>,
}

impl ThankYouPanel {
    pub fn new(auto_return: Option<u64>) -> Self {
        Self { auto_return }
    }
}

impl Widget for ThankYouPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = layout::centered(area, 44, 7);
        let block = styles::glass_block(true);
        let inner = block.inner(card);
        block.render(card, buf);

        let footer = match self.auto_return {
            Some(secs) => format!("Back to the start after {secs}s"),
            None => "Press Enter to return home".to_string(),
        };

        let lines = vec![
            Line::from(Span::styled("Thank you!", styles::title())),
            Line::default(),
            Line::from(Span::styled(
                "We appreciate your time.",
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(Span::styled(footer, styles::text_muted())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
