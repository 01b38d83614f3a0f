//! Star rating panel

use kiosk_app::SubmitPhase;
use kiosk_core::{Rating, MAX_STARS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout;
use crate::theme::styles;

pub struct FeedbackPanel<'a> {
    rating: Rating,
    phase: &'a SubmitPhase,
    /// Selecting a star submits immediately
    submit_on_select: bool,
}

impl<'a> FeedbackPanel<'a> {
    pub fn new(rating: Rating, phase: &'a SubmitPhase, submit_on_select: bool) -> Self {
        Self {
            rating,
            phase,
            submit_on_select,
        }
    }

    fn stars(&self) -> Line<'static> {
        let spans: Vec<Span> = (0..MAX_STARS)
            .map(|i| {
                let lit = self.rating.highlights(i);
                Span::styled(if lit { " ★ " } else { " ☆ " }, styles::star(lit))
            })
            .collect();
        Line::from(spans)
    }

    fn footer(&self) -> Line<'static> {
        if let SubmitPhase::Failed { reason } = self.phase {
            return Line::from(Span::styled(
                format!("Could not send: {reason}"),
                styles::status_red(),
            ));
        }
        if self.submit_on_select {
            Line::from(Span::styled("Press 1-5 to rate", styles::text_muted()))
        } else if self.rating.is_set() {
            Line::from(Span::styled(" Submit  [Enter] ", styles::focused_selected()))
        } else {
            Line::from(Span::styled("Choose 1 to 5 stars", styles::text_muted()))
        }
    }
}

impl Widget for FeedbackPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = layout::centered(area, 40, 7);
        let block = styles::glass_block(true);
        let inner = block.inner(card);
        block.render(card, buf);

        let lines = vec![
            Line::from(Span::styled("How was your visit?", styles::title())),
            Line::default(),
            self.stars(),
            Line::default(),
            self.footer(),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::render_to_string;

    fn lit_count(content: &str) -> usize {
        content.matches('★').count()
    }

    #[test]
    fn test_unset_rating_has_no_lit_stars() {
        let phase = SubmitPhase::Editing;
        let content = render_to_string(FeedbackPanel::new(Rating::UNSET, &phase, false), 60, 12);
        assert_eq!(lit_count(&content), 0);
        assert_eq!(content.matches('☆').count(), 5);
        assert!(content.contains("Choose 1 to 5 stars"));
    }

    #[test]
    fn test_rating_lights_prefix() {
        let phase = SubmitPhase::Editing;
        let rating = Rating::new(3).unwrap();
        let content = render_to_string(FeedbackPanel::new(rating, &phase, false), 60, 12);
        assert_eq!(lit_count(&content), 3);
        assert!(content.contains("Submit"));
    }

    #[test]
    fn test_failure_is_shown() {
        let phase = SubmitPhase::Failed {
            reason: "offline".into(),
        };
        let content = render_to_string(
            FeedbackPanel::new(Rating::new(5).unwrap(), &phase, true),
            60,
            12,
        );
        assert!(content.contains("Could not send: offline"));
    }
}
