//! Video selection panel: clip list with the current playback

use kiosk_app::video::NowPlaying;
use kiosk_app::VideoClip;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct VideoSelectionPanel<'a> {
    videos: &'a [VideoClip],
    cursor: usize,
    now_playing: Option<&'a NowPlaying>,
}

impl<'a> VideoSelectionPanel<'a> {
    pub fn new(videos: &'a [VideoClip], cursor: usize, now_playing: Option<&'a NowPlaying>) -> Self {
        Self {
            videos,
            cursor,
            now_playing,
        }
    }

    fn clip_line(&self, index: usize, clip: &VideoClip) -> Line<'static> {
        let playing = self.now_playing.is_some_and(|p| p.clip_index == index);
        let marker = if playing { "▶" } else { " " };
        let text = format!(
            " {marker} {}. {}  ({}s)",
            index + 1,
            clip.title,
            clip.duration_secs
        );
        if index == self.cursor {
            Line::from(Span::styled(text, styles::focused_selected()))
        } else if playing {
            Line::from(Span::styled(text, styles::accent()))
        } else {
            Line::from(Span::styled(text, styles::text_primary()))
        }
    }

    fn playback_line(&self) -> Line<'static> {
        let Some(playing) = self.now_playing else {
            return Line::from(Span::styled("Nothing playing", styles::text_muted()));
        };
        let Some(clip) = self.videos.get(playing.clip_index) else {
            return Line::default();
        };
        let elapsed = playing.started_at.elapsed().as_secs();
        let left = clip.duration_secs.saturating_sub(elapsed);
        Line::from(vec![
            Span::styled("Now playing: ", styles::text_secondary()),
            Span::styled(clip.title.clone(), styles::accent_bold()),
            Span::styled(format!("  {left}s left"), styles::text_muted()),
        ])
    }
}

impl Widget for VideoSelectionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Videos ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [list_area, _, playback_area, continue_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        if self.videos.is_empty() {
            Paragraph::new(Span::styled("No videos configured", styles::text_muted()))
                .render(list_area, buf);
        } else {
            let lines: Vec<Line> = self
                .videos
                .iter()
                .enumerate()
                .map(|(i, clip)| self.clip_line(i, clip))
                .collect();
            Paragraph::new(lines).render(list_area, buf);
        }

        Paragraph::new(self.playback_line()).render(playback_area, buf);
        Paragraph::new(Span::styled(" Continue  [n] ", styles::focused_selected()))
            .render(continue_area, buf);
    }
}
