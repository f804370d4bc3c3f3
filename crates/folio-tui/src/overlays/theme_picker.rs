use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::theme::ThemeMode;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay, render_separator};
use crate::effects::UiEffect;
use crate::hit::{HitMap, HitTarget};
use crate::palette::Palette;

#[derive(Debug, Clone)]
pub struct ThemePickerState {
    pub selected: usize,
}

impl ThemePickerState {
    pub fn open(current: ThemeMode) -> Self {
        let selected = ThemeMode::all()
            .iter()
            .position(|mode| *mode == current)
            .unwrap_or(0);
        Self { selected }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, hits: &mut HitMap) {
        render_theme_picker(frame, self, area, palette, hits);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Char('q') => OverlayUpdate::close(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < ThemeMode::all().len() - 1 {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Enter => self.confirm(),
            _ => OverlayUpdate::stay(),
        }
    }

    /// Row clicked: select it and apply.
    pub fn click_option(&mut self, index: usize) -> OverlayUpdate {
        if index >= ThemeMode::all().len() {
            return OverlayUpdate::stay();
        }
        self.selected = index;
        self.confirm()
    }

    fn confirm(&self) -> OverlayUpdate {
        let Some(&mode) = ThemeMode::all().get(self.selected) else {
            return OverlayUpdate::close();
        };
        OverlayUpdate::close().with_ui_effects(vec![UiEffect::SetTheme { mode }])
    }
}

fn render_theme_picker(
    frame: &mut Frame,
    picker: &ThemePickerState,
    area: Rect,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let modes = ThemeMode::all();

    let picker_width = 48;
    let picker_height = (modes.len() as u16 + 5).max(7);

    let hints = [
        InputHint::new("↑↓", "navigate"),
        InputHint::new("Enter", "select"),
        InputHint::new("Esc", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        palette,
        &OverlayConfig {
            title: "Theme",
            width: picker_width,
            height: picker_height,
            hints: &hints,
        },
    );
    hits.push(layout.popup, HitTarget::Overlay);

    let list_height = layout.body.height.saturating_sub(1);
    let list_area = Rect::new(layout.body.x, layout.body.y, layout.body.width, list_height);

    let name_width = 8;
    let items: Vec<ListItem> = modes
        .iter()
        .map(|mode| {
            let name = format!("{:<name_width$}", mode.display_name());
            // highlight symbol, name, right padding
            let desc_width = list_area.width.saturating_sub(2 + name_width as u16 + 1) as usize;
            let desc = format!("{:>desc_width$}", mode.description());

            ListItem::new(Line::from(vec![
                Span::styled(
                    name,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(desc, Style::default().fg(palette.muted)),
            ]))
        })
        .collect();

    for index in 0..modes.len() {
        let row = list_area.y + index as u16;
        if row < list_area.bottom() {
            let row_area = Rect::new(list_area.x, row, list_area.width, 1);
            hits.push(row_area, HitTarget::OverlayOption(index));
        }
    }

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(palette.accent)
                .fg(palette.on_accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(picker.selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    render_separator(frame, layout.body, list_height, palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_opens_on_current_mode() {
        assert_eq!(ThemePickerState::open(ThemeMode::Auto).selected, 2);
        assert_eq!(ThemePickerState::open(ThemeMode::Light).selected, 0);
    }

    #[test]
    fn test_enter_applies_selected_mode() {
        let mut picker = ThemePickerState::open(ThemeMode::Light);
        picker.handle_key(key(KeyCode::Down));
        picker.handle_key(key(KeyCode::Down));
        picker.handle_key(key(KeyCode::Down));
        assert_eq!(picker.selected, 2);

        let update = picker.handle_key(key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::SetTheme {
                mode: ThemeMode::Auto
            }]
        ));
    }

    #[test]
    fn test_escape_closes_without_effects() {
        let mut picker = ThemePickerState::open(ThemeMode::Dark);
        let update = picker.handle_key(key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.effects.is_empty());
    }

    #[test]
    fn test_click_option_out_of_range_stays() {
        let mut picker = ThemePickerState::open(ThemeMode::Dark);
        let update = picker.click_option(7);
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert_eq!(picker.selected, 1);
    }
}
