//! Contact form panel
//!
//! Each field is a bordered input; the focused one gets the active border
//! and a cursor. A field's transient message is drawn in red right under it
//! and disappears when the session drops it.

use kiosk_app::{FormSession, SubmitPhase};
use kiosk_core::FieldId;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Rows per field: 3 for the bordered input, 1 for its message
const FIELD_HEIGHT: u16 = 4;

pub struct FormPanel<'a> {
    session: &'a FormSession,
}

impl<'a> FormPanel<'a> {
    pub fn new(session: &'a FormSession) -> Self {
        Self { session }
    }

    fn render_field(&self, field: FieldId, area: Rect, buf: &mut Buffer) {
        let focused = self.session.focus() == Some(field);
        let [input_area, message_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        let block = styles::glass_block(focused).title(format!(" {} ", field.label()));
        let inner = block.inner(input_area);
        block.render(input_area, buf);

        let mut spans = vec![Span::styled(
            self.session.fields.get(field).to_string(),
            styles::text_primary(),
        )];
        if focused && self.session.is_editable() {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        if let Some(message) = self.session.messages.get(field) {
            Paragraph::new(Span::styled(format!(" {message}"), styles::status_red()))
                .render(message_area, buf);
        }
    }

    fn footer(&self) -> Line<'static> {
        match self.session.phase() {
            SubmitPhase::Editing => {
                Line::from(Span::styled(" Submit  [Enter] ", styles::focused_selected()))
            }
            SubmitPhase::Failed { reason } => Line::from(Span::styled(
                format!("Could not send: {reason}"),
                styles::status_red(),
            )),
            other => Line::from(Span::styled(
                format!("Form {}", other.label()),
                styles::text_muted(),
            )),
        }
    }
}

impl Widget for FormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Your details ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut constraints: Vec<Constraint> = FieldId::ALL
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT))
            .collect();
        constraints.push(Constraint::Length(1));
        let rows = Layout::vertical(constraints).split(inner);

        for (field, row) in FieldId::ALL.into_iter().zip(rows.iter()) {
            self.render_field(field, *row, buf);
        }
        Paragraph::new(self.footer()).render(rows[FieldId::ALL.len()], buf);
    }
}
