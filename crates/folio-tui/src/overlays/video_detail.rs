//! Video detail modal: metadata, full description and a watch button.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::content::Video;
use folio_core::format::{
    format_duration, format_published_date, format_view_count, strip_tags,
};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use super::render_utils::{
    InputHint, OverlayConfig, render_button, render_overlay, render_separator,
};
use crate::common::{openable_url, sanitize_for_display, truncate_with_ellipsis};
use crate::effects::UiEffect;
use crate::hit::{HitMap, HitTarget};
use crate::palette::Palette;

const WATCH_LABEL: &str = "▶ Watch on YouTube";

#[derive(Debug, Clone)]
pub struct VideoDetailState {
    pub video: Video,
    /// Description scroll offset, in rows.
    pub scroll: u16,
}

impl VideoDetailState {
    pub fn new(video: Video) -> Self {
        Self { video, scroll: 0 }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Enter | KeyCode::Char('o' | 'w') => self.watch(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                OverlayUpdate::stay()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    /// Opens the video page and closes the modal.
    pub fn watch(&self) -> OverlayUpdate {
        match openable_url(&self.video.url) {
            Some(url) => {
                OverlayUpdate::close().with_ui_effects(vec![UiEffect::OpenBrowser { url }])
            }
            None => {
                tracing::debug!(id = %self.video.id, "video has no openable url");
                OverlayUpdate::stay()
            }
        }
    }

    fn meta_line(&self) -> String {
        let mut parts = vec![format!("▶ {}", format_duration(self.video.duration_secs))];
        parts.push(format!("{} views", format_view_count(&self.video.view_count)));
        if !self.video.published_at.trim().is_empty() {
            parts.push(format_published_date(&self.video.published_at));
        }
        parts.join(" · ")
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, hits: &mut HitMap) {
        let hints = [
            InputHint::new("Enter", "watch"),
            InputHint::new("↑↓", "scroll"),
            InputHint::new("Esc", "close"),
        ];
        let width = area.width.saturating_sub(8).clamp(20, 90);
        let height = area.height.saturating_sub(4).clamp(10, 24);
        let layout = render_overlay(
            frame,
            area,
            palette,
            &OverlayConfig {
                title: "Video",
                width,
                height,
                hints: &hints,
            },
        );
        hits.push(layout.popup, HitTarget::Overlay);

        let body = layout.body;
        if body.height < 5 || body.width < 4 {
            return;
        }
        let text_width = body.width as usize;

        let title = truncate_with_ellipsis(&sanitize_for_display(&self.video.title), text_width);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                title,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ))),
            Rect::new(body.x, body.y, body.width, 1),
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                truncate_with_ellipsis(&self.meta_line(), text_width),
                Style::default().fg(palette.muted),
            ))),
            Rect::new(body.x, body.y + 1, body.width, 1),
        );
        render_separator(frame, body, 2, palette);

        // Title, meta, separator above; blank row and button below.
        let description_area = Rect::new(body.x, body.y + 3, body.width, body.height - 5);
        let description = strip_tags(&self.video.description);
        let description = if description.is_empty() {
            "No description".to_string()
        } else {
            sanitize_for_display(&description).into_owned()
        };
        frame.render_widget(
            Paragraph::new(description)
                .style(Style::default().fg(palette.text))
                .wrap(Wrap { trim: true })
                .scroll((self.scroll, 0)),
            description_area,
        );

        let button_row = Rect::new(body.x, body.bottom() - 1, body.width, 1);
        let button = render_button(frame, button_row, WATCH_LABEL, palette);
        hits.push(button, HitTarget::OverlayButton);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn video(url: &str) -> Video {
        Video {
            id: "abc".into(),
            title: "Talk".into(),
            url: url.into(),
            duration_secs: 125,
            view_count: "1500".into(),
            published_at: "2025-01-05T10:00:00Z".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_enter_opens_video_and_closes() {
        let mut detail = VideoDetailState::new(video("https://www.youtube.com/watch?v=abc"));
        let update = detail.handle_key(key(KeyCode::Enter));

        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::OpenBrowser { url }] if url == "https://www.youtube.com/watch?v=abc"
        ));
    }

    #[test]
    fn test_placeholder_url_keeps_modal_open() {
        let detail = VideoDetailState::new(video("#"));
        let update = detail.watch();
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert!(update.effects.is_empty());
    }

    #[test]
    fn test_meta_line() {
        let detail = VideoDetailState::new(video("https://youtu.be/abc"));
        assert_eq!(detail.meta_line(), "▶ 2:05 · 1.5K views · Jan 5, 2025");
    }

    #[test]
    fn test_scroll_saturates_at_top() {
        let mut detail = VideoDetailState::new(video("https://youtu.be/abc"));
        detail.handle_key(key(KeyCode::Up));
        assert_eq!(detail.scroll, 0);
        detail.handle_key(key(KeyCode::Down));
        assert_eq!(detail.scroll, 1);
    }
}
