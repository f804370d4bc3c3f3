//! Mouse hit testing.
//!
//! Render registers a rectangle for every clickable element; the reducer
//! resolves mouse positions against the map built by the previous frame.

use folio_core::carousel::{PointerTarget, TargetKind};
use folio_core::sections::Section;
use ratatui::layout::{Position, Rect};

use crate::state::Tab;

/// Clickable element on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Tab(Tab),
    ThemeButton,
    /// Carousel track outside any card.
    Track(Section),
    Previous(Section),
    Next(Section),
    PageMark {
        section: Section,
        page: usize,
    },
    /// Card body.
    Card {
        section: Section,
        slot: usize,
    },
    /// Link row inside a card.
    CardLink {
        section: Section,
        slot: usize,
    },
    /// Social link on the About page, by position in the rendered list.
    Social(usize),
    /// Contact link in the About summary.
    Contact,
    /// Modal body.
    Overlay,
    /// Modal action button.
    OverlayButton,
    /// Selectable row in a modal list.
    OverlayOption(usize),
}

impl HitTarget {
    /// Carousel section the element belongs to.
    pub fn section(self) -> Option<Section> {
        match self {
            HitTarget::Track(section)
            | HitTarget::Previous(section)
            | HitTarget::Next(section)
            | HitTarget::PageMark { section, .. }
            | HitTarget::Card { section, .. }
            | HitTarget::CardLink { section, .. } => Some(section),
            HitTarget::Tab(_)
            | HitTarget::ThemeButton
            | HitTarget::Social(_)
            | HitTarget::Contact
            | HitTarget::Overlay
            | HitTarget::OverlayButton
            | HitTarget::OverlayOption(_) => None,
        }
    }

    /// Element path under the pointer, for the carousel's interactivity filter.
    pub fn pointer_target(self) -> PointerTarget {
        let track = PointerTarget::new(TargetKind::Track);
        match self {
            HitTarget::Track(_) => track,
            HitTarget::Card { .. } => track.nested(TargetKind::Card).nested(TargetKind::Text),
            HitTarget::CardLink { .. } => track.nested(TargetKind::Card).nested(TargetKind::Link),
            HitTarget::Previous(_) | HitTarget::Next(_) | HitTarget::PageMark { .. } => {
                track.nested(TargetKind::Button)
            }
            HitTarget::Tab(_) | HitTarget::Social(_) | HitTarget::Contact => {
                PointerTarget::new(TargetKind::Link)
            }
            HitTarget::ThemeButton
            | HitTarget::Overlay
            | HitTarget::OverlayButton
            | HitTarget::OverlayOption(_) => PointerTarget::new(TargetKind::Button),
        }
    }
}

#[derive(Debug, Default)]
pub struct HitMap {
    areas: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.areas.push((area, target));
        }
    }

    /// Topmost target at a cell; later registrations sit on top.
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.areas
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_registrations_win() {
        let mut hits = HitMap::default();
        let card = HitTarget::Card {
            section: Section::Projects,
            slot: 0,
        };
        let link = HitTarget::CardLink {
            section: Section::Projects,
            slot: 0,
        };
        hits.push(Rect::new(0, 0, 20, 10), card);
        hits.push(Rect::new(2, 8, 10, 1), link);

        assert_eq!(hits.hit(3, 8), Some(link));
        assert_eq!(hits.hit(3, 2), Some(card));
        assert_eq!(hits.hit(30, 2), None);
    }

    #[test]
    fn test_card_body_is_draggable_but_links_are_not() {
        let body = HitTarget::Card {
            section: Section::Videos,
            slot: 1,
        };
        let link = HitTarget::CardLink {
            section: Section::Videos,
            slot: 1,
        };
        assert!(!body.pointer_target().is_interactive());
        assert!(link.pointer_target().is_interactive());
        assert!(HitTarget::Next(Section::Videos).pointer_target().is_interactive());
        assert_eq!(link.section(), Some(Section::Videos));
    }
}
