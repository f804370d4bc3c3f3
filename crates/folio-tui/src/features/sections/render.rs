use folio_core::sections::{PagedSection, Section};
use folio_core::services::ContentSource;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use super::CardView;
use crate::common::{sanitize_for_display, truncate_with_ellipsis};
use crate::hit::{HitMap, HitTarget};
use crate::palette::Palette;
use crate::render::SPINNER_FRAMES;
use crate::state::TuiState;

/// Display units covered by one terminal column.
pub const CELL_WIDTH_UNITS: f64 = 8.0;

/// Horizontal padding around the carousel track, in columns.
const TRACK_MARGIN: u16 = 1;
const PREVIOUS_LABEL: &str = "◀ Prev";
const NEXT_LABEL: &str = "Next ▶";

/// Viewport width in display units for a terminal `columns` wide.
pub fn section_viewport(columns: u16) -> u32 {
    let track = columns.saturating_sub(TRACK_MARGIN * 2);
    (f64::from(track) * CELL_WIDTH_UNITS) as u32
}

/// Card gap in columns (at least one).
fn gap_columns(gap: u16) -> u16 {
    ((f64::from(gap) / CELL_WIDTH_UNITS).round() as u16).max(1)
}

pub fn render_section(frame: &mut Frame, area: Rect, state: &TuiState, section: Section) {
    let palette = state.palette();
    let paged = state.sections.get(section);
    let mut hits = state.hits.borrow_mut();

    if area.height < 4 {
        return;
    }
    let heading = Rect::new(area.x, area.y, area.width, 1);
    let controls = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    let track = Rect::new(
        area.x + TRACK_MARGIN,
        area.y + 2,
        area.width.saturating_sub(TRACK_MARGIN * 2),
        area.height.saturating_sub(4),
    );

    render_heading(frame, heading, state, section, paged, &palette);

    if paged.item_count() == 0 {
        let message = if state.sections.is_loaded(section) {
            format!("No {} to show.", section.title().to_lowercase())
        } else {
            let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
            format!("{spinner} Loading {}…", section.title().to_lowercase())
        };
        let y = track.y + track.height / 2;
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(palette.muted)))
                .alignment(Alignment::Center),
            Rect::new(track.x, y, track.width, 1),
        );
        return;
    }

    hits.push(track, HitTarget::Track(section));
    render_cards(frame, track, state, section, paged, &palette, &mut hits);
    render_controls(frame, controls, section, paged, &palette, &mut hits);
}

fn render_heading(
    frame: &mut Frame,
    area: Rect,
    state: &TuiState,
    section: Section,
    paged: &dyn PagedSection,
    palette: &Palette,
) {
    let mut spans = vec![Span::styled(
        section.title(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if paged.page_count() > 0 {
        spans.push(Span::styled(
            format!("  page {}/{}", paged.current_page() + 1, paged.page_count()),
            Style::default().fg(palette.muted),
        ));
    }
    if state.sections.is_loaded(section)
        && state.tasks.is_running(ContentSource::for_section(section))
    {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("  {spinner} refreshing"),
            Style::default().fg(palette.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Moves `rect` horizontally by `shift` columns and clips it to `bounds`.
fn shift_rect(rect: Rect, shift: i32, bounds: Rect) -> Option<Rect> {
    let x = i32::from(rect.x) + shift;
    let left = x.max(i32::from(bounds.x));
    let right = (x + i32::from(rect.width)).min(i32::from(bounds.right()));
    (right > left).then(|| Rect::new(left as u16, rect.y, (right - left) as u16, rect.height))
}

fn render_cards(
    frame: &mut Frame,
    track: Rect,
    state: &TuiState,
    section: Section,
    paged: &dyn PagedSection,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let per_page = paged.items_per_page().max(1) as u16;
    let gap = gap_columns(paged.gap());
    let card_width = track
        .width
        .saturating_sub(gap * (per_page - 1))
        .checked_div(per_page)
        .unwrap_or(0);
    if card_width < 4 {
        return;
    }

    // The track follows the pointer while a drag is live.
    let shift = paged
        .drag_offset()
        .map_or(0, |offset| (offset / CELL_WIDTH_UNITS).round() as i32);

    for (slot, card) in state.sections.cards(section).iter().enumerate() {
        let x = track.x + (card_width + gap) * slot as u16;
        let base = Rect::new(x, track.y, card_width, track.height);
        let Some(area) = shift_rect(base, shift, track) else {
            continue;
        };
        let focused = state.focus == Some(slot);
        render_card(frame, area, card, focused, palette);
        hits.push(area, HitTarget::Card { section, slot });
        if card.link_label.is_some() && area.height > 2 && area.width > 2 {
            let link_row = Rect::new(area.x + 1, area.bottom() - 2, area.width - 2, 1);
            hits.push(link_row, HitTarget::CardLink { section, slot });
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardView, focused: bool, palette: &Palette) {
    let border = if focused { palette.accent } else { palette.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let mut lines = Vec::new();

    let mut title = Vec::new();
    if let Some(badge) = &card.badge {
        title.push(Span::styled(
            format!("{badge} "),
            Style::default().fg(palette.accent),
        ));
    }
    let badge_width = card.badge.as_ref().map_or(0, |b| b.chars().count() + 1);
    title.push(Span::styled(
        truncate_with_ellipsis(
            &sanitize_for_display(&card.title),
            width.saturating_sub(badge_width),
        ),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(title));

    if let Some(subtitle) = &card.subtitle {
        lines.push(Line::from(Span::styled(
            truncate_with_ellipsis(&sanitize_for_display(subtitle), width),
            Style::default().fg(palette.muted),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        sanitize_for_display(&card.body).into_owned(),
        Style::default().fg(palette.text),
    )));

    let footer_height = card.meta.len() as u16 + u16::from(card.link_label.is_some());
    let body_height = inner.height.saturating_sub(footer_height);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        Rect::new(inner.x, inner.y, inner.width, body_height),
    );

    let mut y = inner.y + body_height;
    for meta in &card.meta {
        if y >= inner.bottom() {
            return;
        }
        frame.render_widget(
            Paragraph::new(Span::styled(
                truncate_with_ellipsis(&sanitize_for_display(meta), width),
                Style::default().fg(palette.muted),
            )),
            Rect::new(inner.x, y, inner.width, 1),
        );
        y += 1;
    }
    if let Some(label) = card.link_label
        && y < inner.bottom()
    {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("↗ {label}"),
                Style::default()
                    .fg(palette.link)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }
}

fn render_controls(
    frame: &mut Frame,
    area: Rect,
    section: Section,
    paged: &dyn PagedSection,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let button = |enabled: bool| {
        if enabled {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.border)
        }
    };

    let prev_width = PREVIOUS_LABEL.chars().count() as u16;
    let next_width = NEXT_LABEL.chars().count() as u16;
    let prev = Rect::new(area.x + TRACK_MARGIN, area.y, prev_width, 1);
    let next = Rect::new(
        area.right().saturating_sub(next_width + TRACK_MARGIN),
        area.y,
        next_width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(PREVIOUS_LABEL, button(paged.can_go_previous()))),
        prev,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(NEXT_LABEL, button(paged.can_go_next()))),
        next,
    );
    if paged.can_go_previous() {
        hits.push(prev, HitTarget::Previous(section));
    }
    if paged.can_go_next() {
        hits.push(next, HitTarget::Next(section));
    }

    // Page marks: one dot per page, two columns apart.
    let marks = paged.page_marks();
    if marks.len() < 2 {
        return;
    }
    let marks_width = (marks.len() * 2 - 1) as u16;
    if marks_width + prev_width + next_width + 4 > area.width {
        return;
    }
    let start = area.x + (area.width - marks_width) / 2;
    for &page in marks {
        let current = page == paged.current_page();
        let dot = Rect::new(start + page as u16 * 2, area.y, 1, 1);
        let style = if current {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.muted)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(if current { "●" } else { "○" }, style)),
            dot,
        );
        hits.push(dot, HitTarget::PageMark { section, page });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_units() {
        assert_eq!(section_viewport(130), 1024);
        assert_eq!(section_viewport(1), 0);
    }

    #[test]
    fn test_gap_columns() {
        assert_eq!(gap_columns(20), 3);
        assert_eq!(gap_columns(15), 2);
        assert_eq!(gap_columns(0), 1);
    }

    #[test]
    fn test_shift_rect_clips_to_track() {
        let track = Rect::new(10, 0, 40, 5);
        let card = Rect::new(10, 0, 20, 5);
        assert_eq!(shift_rect(card, 0, track), Some(card));
        assert_eq!(shift_rect(card, -5, track), Some(Rect::new(10, 0, 15, 5)));
        assert_eq!(shift_rect(card, 35, track), Some(Rect::new(45, 0, 5, 5)));
        assert_eq!(shift_rect(card, -25, track), None);
    }
}
