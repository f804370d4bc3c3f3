use crossterm::event::{KeyCode, KeyEvent};
use folio_core::sections::Section;

use super::{Activation, CELL_WIDTH_UNITS};
use crate::effects::UiEffect;
use crate::hit::HitTarget;
use crate::overlays::{Overlay, VideoDetailState};
use crate::state::{AppState, TuiState};
use crate::update::open_url;

/// Pointer position in display units for a terminal column.
pub fn units(column: u16) -> f64 {
    f64::from(column) * CELL_WIDTH_UNITS
}

/// Handles a key for the active section. Returns `None` when the key isn't ours.
pub fn handle_key(app: &mut AppState, section: Section, key: KeyEvent) -> Option<Vec<UiEffect>> {
    let tui = &mut app.tui;
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            tui.sections.get_mut(section).go_to_previous();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            tui.sections.get_mut(section).go_to_next();
        }
        KeyCode::Home | KeyCode::Char('g') => {
            tui.sections.get_mut(section).go_to_page(0);
        }
        KeyCode::End | KeyCode::Char('G') => {
            let paged = tui.sections.get_mut(section);
            let last = paged.page_count().saturating_sub(1);
            paged.go_to_page(last);
        }
        KeyCode::Down | KeyCode::Char('j') => move_focus(tui, section, true),
        KeyCode::Up | KeyCode::Char('k') => move_focus(tui, section, false),
        KeyCode::Enter => {
            let slot = tui.focus?;
            return Some(click_card(app, section, slot));
        }
        KeyCode::Char('o') => {
            let slot = tui.focus?;
            return Some(open_card_link(tui, section, slot));
        }
        _ => return None,
    }
    clamp_focus(&mut app.tui, section);
    Some(vec![])
}

/// Mouse wheel over a section pages through it.
pub fn handle_scroll(tui: &mut TuiState, section: Section, forward: bool) {
    let paged = tui.sections.get_mut(section);
    if forward {
        paged.go_to_next();
    } else {
        paged.go_to_previous();
    }
    clamp_focus(tui, section);
}

fn move_focus(tui: &mut TuiState, section: Section, forward: bool) {
    let visible = tui.sections.get(section).visible_count();
    if visible == 0 {
        tui.focus = None;
        return;
    }
    tui.focus = Some(match (tui.focus, forward) {
        (None, true) => 0,
        (None, false) => visible - 1,
        (Some(slot), true) => (slot + 1) % visible,
        (Some(slot), false) => (slot + visible - 1) % visible,
    });
}

/// Keeps the focused slot on the current page.
pub(crate) fn clamp_focus(tui: &mut TuiState, section: Section) {
    let visible = tui.sections.get(section).visible_count();
    tui.focus = match tui.focus {
        Some(_) if visible == 0 => None,
        Some(slot) => Some(slot.min(visible - 1)),
        None => None,
    };
}

/// Click on a card body.
pub(crate) fn click_card(app: &mut AppState, section: Section, slot: usize) -> Vec<UiEffect> {
    let target = HitTarget::Card { section, slot }.pointer_target();
    app.tui.focus = Some(slot);
    match app.tui.sections.activate(section, &target, slot) {
        Some(Activation::Open(url)) => open_url(&mut app.tui, &url),
        Some(Activation::ShowVideo(video)) => {
            app.overlay = Some(Overlay::VideoDetail(VideoDetailState::new(video)));
            vec![]
        }
        None => vec![],
    }
}

/// Click on a card's link row.
pub(crate) fn open_card_link(tui: &mut TuiState, section: Section, slot: usize) -> Vec<UiEffect> {
    match tui.sections.link(section, slot) {
        Some(url) => open_url(tui, &url),
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::KeyModifiers;
    use folio_core::content::{GithubProject, Video};
    use folio_core::services::LoadedContent;
    use folio_core::theme::{Appearance, ThemeMode};

    use super::*;

    fn app_with_projects(count: usize) -> AppState {
        let mut app = AppState::new(Duration::ZERO, ThemeMode::Light, Appearance::Light);
        let projects = (0..count)
            .map(|i| GithubProject {
                name: format!("p{i}"),
                html_url: format!("https://github.com/me/p{i}"),
                ..Default::default()
            })
            .collect();
        app.tui.sections.apply(LoadedContent::Projects(projects));
        // 1366+ units: two projects per page.
        app.tui.sections.on_resize(1400, Instant::now());
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_page_through_section() {
        let mut app = app_with_projects(5);
        let paged = |app: &AppState| app.tui.sections.get(Section::Projects).current_page();

        handle_key(&mut app, Section::Projects, key(KeyCode::Right));
        assert_eq!(paged(&app), 1);
        handle_key(&mut app, Section::Projects, key(KeyCode::End));
        assert_eq!(paged(&app), 2);
        handle_key(&mut app, Section::Projects, key(KeyCode::Right));
        assert_eq!(paged(&app), 2);
        handle_key(&mut app, Section::Projects, key(KeyCode::Home));
        assert_eq!(paged(&app), 0);
        handle_key(&mut app, Section::Projects, key(KeyCode::Left));
        assert_eq!(paged(&app), 0);
    }

    #[test]
    fn test_focus_is_clamped_on_short_last_page() {
        let mut app = app_with_projects(3);
        handle_key(&mut app, Section::Projects, key(KeyCode::Up));
        assert_eq!(app.tui.focus, Some(1));

        handle_key(&mut app, Section::Projects, key(KeyCode::End));
        assert_eq!(app.tui.focus, Some(0));
    }

    #[test]
    fn test_enter_opens_focused_project() {
        let mut app = app_with_projects(2);
        handle_key(&mut app, Section::Projects, key(KeyCode::Down));
        handle_key(&mut app, Section::Projects, key(KeyCode::Down));

        let effects = handle_key(&mut app, Section::Projects, key(KeyCode::Enter)).unwrap();
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::OpenBrowser { url }] if url == "https://github.com/me/p1"
        ));
    }

    #[test]
    fn test_enter_without_focus_is_ignored() {
        let mut app = app_with_projects(2);
        assert!(handle_key(&mut app, Section::Projects, key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_video_click_opens_detail_modal() {
        let mut app = AppState::new(Duration::ZERO, ThemeMode::Light, Appearance::Light);
        app.tui.sections.apply(LoadedContent::Videos(vec![Video {
            id: "a".into(),
            ..Default::default()
        }]));

        let effects = click_card(&mut app, Section::Videos, 0);
        assert!(effects.is_empty());
        assert!(matches!(app.overlay, Some(Overlay::VideoDetail(_))));
    }
}
