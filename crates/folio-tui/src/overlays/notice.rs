//! Informational popup with a single acknowledge button.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::content::DiscordMessages;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use super::render_utils::{OverlayConfig, render_button, render_overlay};
use crate::hit::{HitMap, HitTarget};
use crate::palette::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeState {
    pub title: String,
    pub message: String,
    pub button: String,
}

impl NoticeState {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        button: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            button: button.into(),
        }
    }

    /// "Coming soon" popup for the Discord link.
    pub fn discord(messages: &DiscordMessages) -> Self {
        let or = |value: &str, default: &str| {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };
        Self {
            title: or(&messages.popup_title, "Discord"),
            message: or(&messages.popup_message, "The Discord server will be available soon."),
            button: or(&messages.popup_button_text, "OK"),
        }
    }

    pub fn handle_key(&self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | ' ') => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, hits: &mut HitMap) {
        let width = 56;
        let text_width = usize::from(width - 4);
        let message_rows = textwrap_rows(&self.message, text_width);
        // Borders, padding row, blank row, button row.
        let height = message_rows + 5;

        let layout = render_overlay(
            frame,
            area,
            palette,
            &OverlayConfig {
                title: &self.title,
                width,
                height,
                hints: &[],
            },
        );
        hits.push(layout.popup, HitTarget::Overlay);

        let body = layout.body;
        if body.height < 3 || body.width < 4 {
            return;
        }
        let message_area = Rect::new(body.x + 1, body.y + 1, body.width - 2, body.height - 3);
        frame.render_widget(
            Paragraph::new(self.message.as_str())
                .style(Style::default().fg(palette.text))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            message_area,
        );

        let button_row = Rect::new(body.x, body.bottom() - 1, body.width, 1);
        let button = render_button(frame, button_row, &self.button, palette);
        hits.push(button, HitTarget::OverlayButton);
    }
}

/// Rough row count of `text` wrapped at `width` columns.
fn textwrap_rows(text: &str, width: usize) -> u16 {
    let chars = text.chars().count();
    let rows = chars.div_ceil(width.max(1)).max(1);
    u16::try_from(rows).unwrap_or(u16::MAX).min(12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::OverlayTransition;

    #[test]
    fn test_discord_notice_uses_configured_text() {
        let notice = NoticeState::discord(&DiscordMessages {
            popup_title: "Discord Server".into(),
            popup_message: "Soon!".into(),
            popup_button_text: "Got it!".into(),
        });
        assert_eq!(notice, NoticeState::new("Discord Server", "Soon!", "Got it!"));
    }

    #[test]
    fn test_discord_notice_defaults() {
        let notice = NoticeState::discord(&DiscordMessages::default());
        assert_eq!(notice.title, "Discord");
        assert_eq!(notice.button, "OK");
    }

    #[test]
    fn test_any_confirm_key_closes() {
        let notice = NoticeState::new("t", "m", "b");
        let update = notice.handle_key(KeyEvent::from(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        let update = notice.handle_key(KeyEvent::from(KeyCode::Char('x')));
        assert!(matches!(update.transition, OverlayTransition::Stay));
    }

    #[test]
    fn test_row_estimate() {
        assert_eq!(textwrap_rows("", 10), 1);
        assert_eq!(textwrap_rows("abcdefghijk", 10), 2);
    }
}
