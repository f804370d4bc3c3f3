//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame` and never
//! return effects. The only state they touch is the hit map, which records
//! where clickable elements landed for the next mouse event.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::common::truncate_with_ellipsis;
use crate::features::about::render_about;
use crate::features::header::render_header;
use crate::features::sections::render_section;
use crate::overlays::OverlayExt;
use crate::overlays::render_utils::{InputHint, hint_line};
use crate::state::{AppState, Tab, TuiState};

/// Header row plus the rule below it.
const HEADER_HEIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 1;

/// Spinner frames for loading indicators.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;
    let palette = state.palette();
    state.hits.borrow_mut().clear();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    render_header(frame, Rect::new(header.x, header.y, header.width, 1), state);
    if header.height > 1 {
        let rule = "─".repeat(header.width as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(rule, Style::default().fg(palette.border))),
            Rect::new(header.x, header.y + 1, header.width, 1),
        );
    }

    match state.tab {
        Tab::About => render_about(frame, body, state),
        Tab::Section(section) => render_section(frame, body, state, section),
    }

    render_footer(frame, footer, state);

    app.overlay
        .render(frame, area, &palette, &mut state.hits.borrow_mut());
}

fn footer_hints(state: &TuiState) -> Vec<InputHint<'static>> {
    let mut hints = vec![InputHint::new("Tab", "section")];
    if state.active_section().is_some() {
        hints.extend([
            InputHint::new("←→", "page"),
            InputHint::new("↑↓", "card"),
            InputHint::new("Enter", "open"),
        ]);
    } else {
        hints.push(InputHint::new("c", "contact"));
    }
    hints.extend([
        InputHint::new("t", "theme"),
        InputHint::new("r", "reload"),
        InputHint::new("q", "quit"),
    ]);
    hints
}

fn render_footer(frame: &mut Frame, area: Rect, state: &TuiState) {
    if area.height == 0 {
        return;
    }
    let palette = state.palette();
    let line = match &state.status {
        Some(status) => Line::from(Span::styled(
            truncate_with_ellipsis(status, area.width as usize),
            Style::default().fg(palette.muted),
        )),
        None => hint_line(&footer_hints(state), &palette),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
