use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::palette::Palette;

/// Centers a `width` x `height` box inside `area`, shrinking it to fit.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the background and draws the bordered, titled container.
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, palette: &Palette) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface).fg(palette.text))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

pub struct OverlayLayout {
    pub popup: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Render a standard overlay container and return its layout.
pub fn render_overlay(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    config: &OverlayConfig<'_>,
) -> OverlayLayout {
    let popup = calculate_overlay_area(area, config.width, config.height);
    render_overlay_container(frame, popup, config.title, palette);

    let inner = Rect::new(
        popup.x + 1,
        popup.y + 1,
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    );

    if !config.hints.is_empty() {
        render_hints(frame, inner, config.hints, palette);
    }

    let footer_height = u16::from(!config.hints.is_empty());
    let body_height = inner.height.saturating_sub(footer_height);
    let footer = Rect::new(inner.x, inner.y + body_height, inner.width, footer_height);
    let body = Rect::new(inner.x, inner.y, inner.width, body_height);

    OverlayLayout {
        popup,
        body,
        footer,
    }
}

/// Keyboard hint shown in footers.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Hint spans: `key action • key action`.
pub fn hint_line<'a>(hints: &[InputHint<'a>], palette: &Palette) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(palette.muted)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(palette.accent)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(palette.muted),
        ));
    }
    Line::from(spans)
}

/// Renders a line of keyboard hints on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], palette: &Palette) {
    let hints_y = area.y + area.height.saturating_sub(1);
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);
    let para = Paragraph::new(hint_line(hints, palette)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

/// Renders a separator line.
pub fn render_separator(frame: &mut Frame, area: Rect, y_offset: u16, palette: &Palette) {
    if y_offset >= area.height {
        return;
    }
    let separator = "─".repeat(area.width as usize);
    let separator_area = Rect::new(area.x, area.y + y_offset, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(palette.border),
        ))),
        separator_area,
    );
}

/// Centered button label; returns the clickable area.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, palette: &Palette) -> Rect {
    let text = format!(" {label} ");
    let width = (text.width() as u16).min(area.width);
    let button = Rect::new(area.x + (area.width - width) / 2, area.y, width, 1.min(area.height));
    frame.render_widget(
        Paragraph::new(text).style(
            Style::default()
                .bg(palette.accent)
                .fg(palette.on_accent)
                .add_modifier(Modifier::BOLD),
        ),
        button,
    );
    button
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_area_is_centered_and_clamped() {
        let area = Rect::new(10, 5, 100, 40);
        assert_eq!(calculate_overlay_area(area, 40, 10), Rect::new(40, 20, 40, 10));

        let small = Rect::new(0, 0, 20, 8);
        let popup = calculate_overlay_area(small, 60, 30);
        assert_eq!(popup.width, 16);
        assert_eq!(popup.height, 6);
        assert_eq!(popup.x, 2);
    }
}
