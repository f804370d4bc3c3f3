//! Header bar: section tabs and the theme button.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::hit::HitTarget;
use crate::state::{Tab, TuiState};

/// Theme button label for the current appearance.
pub fn theme_label(state: &TuiState) -> String {
    let icon = if state.appearance.is_dark() { "☾" } else { "☀" };
    format!(" {icon} {} ", state.theme.display_name())
}

/// Tab label with its number shortcut.
fn tab_label(tab: Tab) -> String {
    format!(" {} {} ", tab.index() + 1, tab.title())
}

pub fn render_header(frame: &mut Frame, area: Rect, state: &TuiState) {
    if area.height == 0 {
        return;
    }
    let palette = state.palette();
    let mut hits = state.hits.borrow_mut();

    let theme = theme_label(state);
    let theme_width = (theme.width() as u16).min(area.width);
    let theme_area = Rect::new(area.right() - theme_width, area.y, theme_width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            theme,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        theme_area,
    );
    hits.push(theme_area, HitTarget::ThemeButton);

    let tabs_right = theme_area.x.saturating_sub(1);
    let mut x = area.x;
    for tab in Tab::ALL {
        let label = tab_label(tab);
        let width = label.width() as u16;
        if x + width > tabs_right {
            break;
        }
        let style = if tab == state.tab {
            Style::default()
                .bg(palette.accent)
                .fg(palette.on_accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let rect = Rect::new(x, area.y, width, 1);
        frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        hits.push(rect, HitTarget::Tab(tab));
        x += width + 1;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use folio_core::sections::Section;
    use folio_core::theme::{Appearance, ThemeMode};

    use super::*;

    #[test]
    fn test_labels() {
        let state = TuiState::new(Duration::ZERO, ThemeMode::Auto, Appearance::Dark);
        assert_eq!(theme_label(&state), " ☾ auto ");
        assert_eq!(tab_label(Tab::About), " 1 About ");
        assert_eq!(tab_label(Tab::Section(Section::TikTok)), " 7 Shorts ");
    }
}
