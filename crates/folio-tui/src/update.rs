//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio_core::services::{ContentSource, LoadedContent};

use crate::common::openable_url;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::about::SocialAction;
use crate::features::sections::{self, section_viewport, units};
use crate::hit::HitTarget;
use crate::overlays::{self, NoticeState, Overlay, ThemePickerState};
use crate::state::{AppState, Press, Tab, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, .. } => {
            handle_frame(&mut app.tui, width, Instant::now());
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::ContentLoaded(content) => {
            apply_content(&mut app.tui, content);
            vec![]
        }
        UiEvent::ThemeApplied { mode, appearance } => {
            tracing::debug!(%mode, dark = appearance.is_dark(), "theme applied");
            app.tui.theme = mode;
            app.tui.appearance = appearance;
            vec![]
        }
        UiEvent::TaskStarted { source, started } => {
            app.tui.tasks.state_mut(source).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { source, completed } => {
            let ok = app.tui.tasks.state_mut(source).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                tracing::debug!(%source, "dropping stale loader result");
                vec![]
            }
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Requests every content source, cancelling loaders still in flight.
pub fn load_all(tui: &mut TuiState) -> Vec<UiEffect> {
    ContentSource::ALL
        .into_iter()
        .flat_map(|source| request_load(tui, source))
        .collect()
}

fn request_load(tui: &mut TuiState, source: ContentSource) -> Vec<UiEffect> {
    let id = tui.task_seq.next_id();
    let state = tui.tasks.state_mut(source);
    let mut effects = Vec::with_capacity(2);
    if state.is_running() {
        effects.push(UiEffect::CancelTask {
            source,
            token: state.cancel.take(),
        });
        state.clear();
    }
    state.on_requested(id);
    effects.push(UiEffect::LoadContent {
        task: Some(id),
        source,
    });
    effects
}

fn apply_content(tui: &mut TuiState, content: LoadedContent) {
    match content {
        LoadedContent::PersonalInfo(info) => tui.about.info = Some(info),
        LoadedContent::Social(social) => tui.about.social = Some(social),
        content => {
            tui.sections.apply(content);
            if let Some(section) = tui.active_section() {
                sections::clamp_focus(tui, section);
            }
        }
    }
}

// ============================================================================
// Frame
// ============================================================================

/// Feeds the terminal width to every section and advances timers.
fn handle_frame(tui: &mut TuiState, width: u16, now: Instant) {
    tui.sections.on_resize(section_viewport(width), now);
    if tui.sections.tick(now)
        && let Some(section) = tui.active_section()
    {
        sections::clamp_focus(tui, section);
    }
    tui.sections.on_frame();
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if let Some(update) = overlays::handle_overlay_key(&mut app.overlay, key) {
        return overlays::apply_overlay_update(&mut app.overlay, update);
    }

    app.tui.status = None;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Tab => {
            let tab = app.tui.tab.next();
            switch_tab(&mut app.tui, tab);
            vec![]
        }
        KeyCode::BackTab => {
            let tab = app.tui.tab.previous();
            switch_tab(&mut app.tui, tab);
            vec![]
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                switch_tab(&mut app.tui, tab);
            }
            vec![]
        }
        KeyCode::Char('t') => {
            open_theme_picker(app);
            vec![]
        }
        KeyCode::Char('r') => {
            app.tui.status = Some("Reloading content…".to_string());
            load_all(&mut app.tui)
        }
        _ => match app.tui.tab {
            Tab::About if key.code == KeyCode::Char('c') => open_contact(&mut app.tui),
            Tab::About => vec![],
            Tab::Section(section) => sections::handle_key(app, section, key).unwrap_or_default(),
        },
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    let target = app.tui.hits.borrow().hit(mouse.column, mouse.row);
    let active = app.tui.active_section();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.tui.press = Some(Press {
                target,
                column: mouse.column,
            });
            if app.overlay.is_none()
                && let Some(hit) = target
                && matches!(hit, HitTarget::Card { .. } | HitTarget::Track(_))
                && let Some(section) = hit.section().filter(|s| Some(*s) == active)
            {
                let pointer = hit.pointer_target();
                app.tui
                    .sections
                    .get_mut(section)
                    .drag_start(&pointer, units(mouse.column));
            }
            vec![]
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(section) = active {
                let paged = app.tui.sections.get_mut(section);
                if paged.is_dragging() {
                    paged.drag_move(units(mouse.column));
                }
            }
            vec![]
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(press) = app.tui.press.take() else {
                return vec![];
            };

            if let Some(overlay) = app.overlay.as_mut() {
                if press.target != target {
                    return vec![];
                }
                let update = overlay.handle_click(target);
                return overlays::apply_overlay_update(&mut app.overlay, update);
            }

            if let Some(section) = active
                && app.tui.sections.get(section).is_dragging()
            {
                app.tui.sections.get_mut(section).drag_end();
                sections::clamp_focus(&mut app.tui, section);
                // Pointer travel turns the gesture into a drag, not a click.
                if mouse.column != press.column {
                    return vec![];
                }
            }

            match target {
                Some(hit) if press.target == Some(hit) => {
                    app.tui.status = None;
                    click(app, hit)
                }
                _ => vec![],
            }
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            scroll(app, true);
            vec![]
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            scroll(app, false);
            vec![]
        }
        _ => vec![],
    }
}

fn scroll(app: &mut AppState, forward: bool) {
    if app.overlay.is_some() {
        return;
    }
    if let Some(section) = app.tui.active_section() {
        sections::handle_scroll(&mut app.tui, section, forward);
    }
}

/// A completed click (press and release on the same element).
fn click(app: &mut AppState, target: HitTarget) -> Vec<UiEffect> {
    match target {
        HitTarget::Tab(tab) => {
            switch_tab(&mut app.tui, tab);
            vec![]
        }
        HitTarget::ThemeButton => {
            open_theme_picker(app);
            vec![]
        }
        HitTarget::Previous(section) => {
            app.tui.sections.get_mut(section).go_to_previous();
            sections::clamp_focus(&mut app.tui, section);
            vec![]
        }
        HitTarget::Next(section) => {
            app.tui.sections.get_mut(section).go_to_next();
            sections::clamp_focus(&mut app.tui, section);
            vec![]
        }
        HitTarget::PageMark { section, page } => {
            app.tui.sections.get_mut(section).go_to_page(page);
            sections::clamp_focus(&mut app.tui, section);
            vec![]
        }
        HitTarget::Card { section, slot } => sections::click_card(app, section, slot),
        HitTarget::CardLink { section, slot } => {
            sections::open_card_link(&mut app.tui, section, slot)
        }
        HitTarget::Social(index) => match app.tui.about.social_action(index) {
            Some(SocialAction::Open(url)) => open_url(&mut app.tui, &url),
            Some(SocialAction::Discord(messages)) => {
                app.overlay = Some(Overlay::Notice(NoticeState::discord(&messages)));
                vec![]
            }
            None => vec![],
        },
        HitTarget::Contact => open_contact(&mut app.tui),
        HitTarget::Track(_)
        | HitTarget::Overlay
        | HitTarget::OverlayButton
        | HitTarget::OverlayOption(_) => vec![],
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn switch_tab(tui: &mut TuiState, tab: Tab) {
    if tui.tab == tab {
        return;
    }
    if let Some(section) = tui.active_section() {
        let paged = tui.sections.get_mut(section);
        if paged.is_dragging() {
            paged.drag_end();
        }
    }
    tui.tab = tab;
    tui.focus = None;
    tui.press = None;
}

fn open_theme_picker(app: &mut AppState) {
    app.overlay = Some(Overlay::ThemePicker(ThemePickerState::open(app.tui.theme)));
}

fn open_contact(tui: &mut TuiState) -> Vec<UiEffect> {
    match tui.about.contact_link() {
        Some(url) => open_url(tui, &url),
        None => vec![],
    }
}

/// Hands a link to the system opener, with footer feedback.
pub(crate) fn open_url(tui: &mut TuiState, url: &str) -> Vec<UiEffect> {
    if let Some(url) = openable_url(url) {
        tui.status = Some(format!("Opening {url}"));
        vec![UiEffect::OpenBrowser { url }]
    } else {
        tracing::debug!(url, "ignoring link that cannot be opened");
        tui.status = Some("Nothing to open".to_string());
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use folio_core::content::{GithubProject, PersonalInfo, SocialConfig};
    use folio_core::sections::Section;
    use folio_core::theme::{Appearance, ThemeMode};
    use ratatui::layout::Rect;

    use super::*;
    use crate::common::{TaskCompleted, TaskStarted};

    fn app() -> AppState {
        AppState::new(Duration::ZERO, ThemeMode::Light, Appearance::Light)
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> UiEvent {
        UiEvent::Terminal(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn projects(count: usize) -> LoadedContent {
        LoadedContent::Projects(
            (0..count)
                .map(|i| GithubProject {
                    name: format!("p{i}"),
                    html_url: format!("https://github.com/me/p{i}"),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_load_all_requests_every_source() {
        let mut app = app();
        let effects = load_all(&mut app.tui);
        assert_eq!(effects.len(), ContentSource::ALL.len());
        assert!(app.tui.tasks.is_running(ContentSource::Videos));

        // A reload cancels the loaders still in flight.
        let effects = load_all(&mut app.tui);
        let cancels = effects
            .iter()
            .filter(|e| matches!(e, UiEffect::CancelTask { .. }))
            .count();
        assert_eq!(cancels, ContentSource::ALL.len());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut app = app();
        let first = match request_load(&mut app.tui, ContentSource::Projects).as_slice() {
            [UiEffect::LoadContent { task: Some(id), .. }] => *id,
            other => panic!("unexpected effects: {other:?}"),
        };
        request_load(&mut app.tui, ContentSource::Projects);

        update(
            &mut app,
            UiEvent::TaskStarted {
                source: ContentSource::Projects,
                started: TaskStarted {
                    id: first,
                    cancel: None,
                },
            },
        );
        update(
            &mut app,
            UiEvent::TaskCompleted {
                source: ContentSource::Projects,
                completed: TaskCompleted {
                    id: first,
                    result: Box::new(UiEvent::ContentLoaded(projects(2))),
                },
            },
        );

        assert!(!app.tui.sections.is_loaded(Section::Projects));
        assert!(app.tui.tasks.is_running(ContentSource::Projects));
    }

    #[test]
    fn test_completed_load_reaches_state() {
        let mut app = app();
        let effects = request_load(&mut app.tui, ContentSource::PersonalInfo);
        let [UiEffect::LoadContent { task: Some(id), .. }] = effects.as_slice() else {
            panic!("expected a load effect");
        };
        let info = PersonalInfo {
            name: "Ada".into(),
            ..Default::default()
        };
        update(
            &mut app,
            UiEvent::TaskCompleted {
                source: ContentSource::PersonalInfo,
                completed: TaskCompleted {
                    id: *id,
                    result: Box::new(UiEvent::ContentLoaded(LoadedContent::PersonalInfo(info))),
                },
            },
        );

        assert_eq!(app.tui.about.info.as_ref().map(|i| i.name.as_str()), Some("Ada"));
        assert!(!app.tui.tasks.is_any_running());
    }

    #[test]
    fn test_tab_navigation_keys() {
        let mut app = app();
        update(&mut app, key(KeyCode::Tab));
        assert_eq!(app.tui.tab, Tab::Section(Section::Expertise));
        update(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.tui.tab, Tab::About);
        update(&mut app, key(KeyCode::Char('4')));
        assert_eq!(app.tui.tab, Tab::Section(Section::Publications));
        update(&mut app, key(KeyCode::Char('9')));
        assert_eq!(app.tui.tab, Tab::Section(Section::Publications));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(matches!(update(&mut app, key(KeyCode::Char('q'))).as_slice(), [UiEffect::Quit]));
        let ctrl_c = UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(matches!(update(&mut app, ctrl_c).as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_theme_picker_flow() {
        let mut app = app();
        update(&mut app, key(KeyCode::Char('t')));
        assert!(matches!(app.overlay, Some(Overlay::ThemePicker(_))));

        update(&mut app, key(KeyCode::Down));
        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(app.overlay.is_none());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::SetTheme {
                mode: ThemeMode::Dark
            }]
        ));

        update(
            &mut app,
            UiEvent::ThemeApplied {
                mode: ThemeMode::Dark,
                appearance: Appearance::Dark,
            },
        );
        assert_eq!(app.tui.theme, ThemeMode::Dark);
        assert!(app.tui.appearance.is_dark());
    }

    #[test]
    fn test_frame_applies_layout() {
        let mut app = app();
        update(&mut app, UiEvent::ContentLoaded(projects(5)));
        // 100 columns -> 784 units: one project per page.
        update(&mut app, UiEvent::Frame { width: 100, height: 30 });
        assert_eq!(app.tui.sections.get(Section::Projects).items_per_page(), 1);
        assert_eq!(app.tui.sections.get(Section::Projects).page_count(), 5);
    }

    #[test]
    fn test_click_on_card_opens_project() {
        let mut app = app();
        app.tui.tab = Tab::Section(Section::Projects);
        update(&mut app, UiEvent::ContentLoaded(projects(2)));
        let card = HitTarget::Card {
            section: Section::Projects,
            slot: 1,
        };
        app.tui.hits.borrow_mut().push(Rect::new(40, 5, 30, 10), card);

        update(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 45, 6));
        let effects = update(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 45, 6));

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::OpenBrowser { url }] if url == "https://github.com/me/p1"
        ));
        assert_eq!(app.tui.status.as_deref(), Some("Opening https://github.com/me/p1"));
    }

    #[test]
    fn test_drag_pages_without_clicking() {
        let mut app = app();
        app.tui.tab = Tab::Section(Section::Projects);
        update(&mut app, UiEvent::ContentLoaded(projects(4)));
        update(&mut app, UiEvent::Frame { width: 100, height: 30 });
        let card = HitTarget::Card {
            section: Section::Projects,
            slot: 0,
        };
        app.tui.hits.borrow_mut().push(Rect::new(1, 4, 98, 20), card);

        update(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 60, 10));
        update(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10));
        assert!(app.tui.sections.get(Section::Projects).is_dragging());
        let effects = update(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 40, 10));

        assert!(effects.is_empty());
        assert_eq!(app.tui.sections.get(Section::Projects).current_page(), 1);
        assert!(!app.tui.sections.get(Section::Projects).is_dragging());
    }

    #[test]
    fn test_card_link_click_opens_browser() {
        let mut app = app();
        app.tui.tab = Tab::Section(Section::Projects);
        update(&mut app, UiEvent::ContentLoaded(projects(4)));
        update(&mut app, UiEvent::Frame { width: 100, height: 30 });
        let card = HitTarget::Card {
            section: Section::Projects,
            slot: 0,
        };
        let link = HitTarget::CardLink {
            section: Section::Projects,
            slot: 0,
        };
        app.tui.hits.borrow_mut().push(Rect::new(1, 4, 30, 20), card);
        app.tui.hits.borrow_mut().push(Rect::new(2, 22, 20, 1), link);

        update(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 5, 22));
        assert!(!app.tui.sections.get(Section::Projects).is_dragging());
        let effects = update(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 5, 22));

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::OpenBrowser { url }] if url == "https://github.com/me/p0"
        ));
        assert_eq!(app.tui.sections.get(Section::Projects).current_page(), 0);
    }

    #[test]
    fn test_discord_link_opens_notice() {
        let mut app = app();
        let mut social = SocialConfig::default();
        social
            .social_media
            .insert("discord".into(), "https://discord.gg/x".into());
        social.social_groups.primary = vec!["discord".into()];
        app.tui.about.social = Some(social);
        app.tui.hits.borrow_mut().push(Rect::new(0, 20, 10, 1), HitTarget::Social(0));

        update(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 2, 20));
        let effects = update(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 2, 20));

        assert!(effects.is_empty());
        assert!(matches!(app.overlay, Some(Overlay::Notice(_))));
    }

    #[test]
    fn test_release_elsewhere_is_not_a_click() {
        let mut app = app();
        app.tui.hits.borrow_mut().push(Rect::new(0, 0, 5, 1), HitTarget::Tab(Tab::About));
        app.tui
            .hits
            .borrow_mut()
            .push(Rect::new(6, 0, 5, 1), HitTarget::ThemeButton);

        update(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 7, 0));
        update(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 1, 0));
        assert!(app.overlay.is_none());
    }
}
