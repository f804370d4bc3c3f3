//! Carousel state machine.
//!
//! Two states: idle and dragging. While idle the translate always equals
//! the offset of the current page; a drag moves it freely and drag-end
//! snaps it back to a page boundary, committing a page change when the
//! gesture travelled further than [`DRAG_THRESHOLD`].

use std::ops::Range;
use std::sync::Arc;

use super::{CarouselConfig, CarouselEvent, PointerTarget};
use crate::pagination::{self, Direction};

/// Minimum drag distance (display units) that commits a page change.
pub const DRAG_THRESHOLD: f64 = 100.0;

/// Handle for the per-frame redraw scheduled while a drag is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest(u64);

/// Visual offset of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Idle: `-current_page * 100%` of the viewport.
    Percent(f64),
    /// Dragging: live translate in display units.
    Units(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        start_pos: f64,
        translate_at_start: f64,
    },
}

/// Paginated carousel over a shared, read-only item list.
#[derive(Debug)]
pub struct Carousel<T> {
    items: Arc<[T]>,
    config: CarouselConfig,
    /// Page size the current pages were built with.
    items_per_page: usize,
    pages: Vec<Range<usize>>,
    marks: Vec<usize>,
    current: usize,
    drag: DragState,
    translate: f64,
    /// Width of one page in display units.
    page_extent: f64,
    frame_seq: u64,
    frame: Option<FrameRequest>,
}

impl<T> Carousel<T> {
    pub fn new(config: CarouselConfig) -> Self {
        Self::with_items(config, Arc::from(Vec::new()))
    }

    pub fn with_items(config: CarouselConfig, items: Arc<[T]>) -> Self {
        let mut carousel = Self {
            items,
            config,
            items_per_page: config.items_per_page,
            pages: Vec::new(),
            marks: Vec::new(),
            current: 0,
            drag: DragState::Idle,
            translate: 0.0,
            page_extent: 0.0,
            frame_seq: 0,
            frame: None,
        };
        carousel.rebuild();
        carousel
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Replaces the item list.
    ///
    /// Pages are rebuilt only when the list identity changes; handing back
    /// the same `Arc` is a no-op.
    pub fn set_items(&mut self, items: Arc<[T]>) {
        if Arc::ptr_eq(&self.items, &items) {
            return;
        }
        self.items = items;
        self.rebuild();
    }

    /// Replaces the configuration.
    ///
    /// A new page size re-chunks the list and keeps the first visible item
    /// on screen. Disabling drag abandons a live gesture without a page change.
    pub fn set_config(&mut self, config: CarouselConfig) {
        self.config = config;

        if !config.drag_enabled && self.is_dragging() {
            self.cancel_drag();
        }

        if config.items_per_page != self.items_per_page {
            let first_visible = self.pages.get(self.current).map(|page| page.start);
            self.items_per_page = config.items_per_page;
            if let Some(first) = first_visible
                && self.items_per_page > 0
            {
                self.current = first / self.items_per_page;
            }
            self.rebuild();
        }
    }

    /// Sets the width of one page, used to express page offsets in units.
    pub fn set_page_extent(&mut self, extent: f64) {
        self.page_extent = extent.max(0.0);
        if !self.is_dragging() {
            self.translate = self.page_offset();
        }
    }

    fn rebuild(&mut self) {
        let total = self.items.len();
        self.pages = pagination::page_ranges(total, self.items_per_page);
        self.marks = pagination::page_marks(total, self.items_per_page);
        self.current = self.current.min(self.last_page());
        if !self.is_dragging() {
            self.translate = self.page_offset();
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn go_to_previous(&mut self) -> Option<CarouselEvent<T>> {
        if self.current == 0 {
            return None;
        }
        self.current =
            pagination::clamp_page_delta(self.current, Direction::Backward, self.last_page());
        Some(self.commit())
    }

    pub fn go_to_next(&mut self) -> Option<CarouselEvent<T>> {
        if !self.can_go_next() {
            return None;
        }
        self.current =
            pagination::clamp_page_delta(self.current, Direction::Forward, self.last_page());
        Some(self.commit())
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub fn go_to_page(&mut self, index: usize) -> Option<CarouselEvent<T>> {
        if index >= self.pages.len() {
            return None;
        }
        self.current = index;
        Some(self.commit())
    }

    fn commit(&mut self) -> CarouselEvent<T> {
        if !self.is_dragging() {
            self.translate = self.page_offset();
        }
        CarouselEvent::PageChanged(self.current)
    }

    // ========================================================================
    // Drag
    // ========================================================================

    /// Begins a drag at pointer position `pos`.
    ///
    /// Returns `false` when drag is disabled or the target is interactive;
    /// the pointer event then belongs to the target.
    pub fn drag_start(&mut self, target: &PointerTarget, pos: f64) -> bool {
        if !self.config.drag_enabled || target.is_interactive() {
            return false;
        }
        self.drag = DragState::Dragging {
            start_pos: pos,
            translate_at_start: self.translate,
        };
        self.frame = None;
        self.schedule_frame();
        true
    }

    /// Follows the pointer. Overshoot is not clamped.
    pub fn drag_move(&mut self, pos: f64) {
        if !self.config.drag_enabled {
            return;
        }
        if let DragState::Dragging {
            start_pos,
            translate_at_start,
        } = self.drag
        {
            self.translate = translate_at_start + (pos - start_pos);
        }
    }

    /// Ends the drag, committing a page change past the threshold.
    pub fn drag_end(&mut self) -> Option<CarouselEvent<T>> {
        let DragState::Dragging {
            translate_at_start, ..
        } = self.drag
        else {
            return None;
        };

        let moved_by = self.translate - translate_at_start;
        self.drag = DragState::Idle;
        self.frame = None;

        let event = if moved_by.abs() > DRAG_THRESHOLD {
            if moved_by < 0.0 {
                self.go_to_next()
            } else {
                self.go_to_previous()
            }
        } else {
            None
        };

        self.translate = self.page_offset();
        event
    }

    fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
        self.frame = None;
        self.translate = self.page_offset();
    }

    /// Cancels the pending frame and any live drag.
    pub fn teardown(&mut self) {
        self.cancel_drag();
    }

    // ========================================================================
    // Frame scheduling
    // ========================================================================

    fn schedule_frame(&mut self) {
        self.frame_seq = self.frame_seq.wrapping_add(1);
        self.frame = Some(FrameRequest(self.frame_seq));
    }

    /// Pending redraw request, if a drag is live.
    pub fn frame_request(&self) -> Option<FrameRequest> {
        self.frame
    }

    /// Consumes the pending frame; re-schedules while still dragging.
    pub fn on_frame(&mut self) -> Option<FrameRequest> {
        self.frame.take()?;
        if self.is_dragging() {
            self.schedule_frame();
        }
        self.frame
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_marks(&self) -> &[usize] {
        &self.marks
    }

    /// Items of the current page (empty when there are no pages).
    pub fn current_items(&self) -> &[T] {
        self.page_items(self.current)
    }

    pub fn page_items(&self, index: usize) -> &[T] {
        self.pages
            .get(index)
            .map_or(&[], |range| &self.items[range.clone()])
    }

    /// Position in the full list of the `slot`-th item of the current page.
    pub fn item_index(&self, slot: usize) -> Option<usize> {
        let range = self.pages.get(self.current)?;
        let index = range.start + slot;
        range.contains(&index).then_some(index)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.pages.len()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn transform(&self) -> Transform {
        if self.is_dragging() {
            Transform::Units(self.translate)
        } else {
            Transform::Percent(-(self.current as f64) * 100.0)
        }
    }

    pub fn translate(&self) -> f64 {
        self.translate
    }

    /// Distance travelled by the live drag, in display units.
    pub fn drag_offset(&self) -> Option<f64> {
        match self.drag {
            DragState::Dragging {
                translate_at_start, ..
            } => Some(self.translate - translate_at_start),
            DragState::Idle => None,
        }
    }

    /// Offset implied by the current page.
    pub fn page_offset(&self) -> f64 {
        -(self.current as f64) * self.page_extent
    }

    fn last_page(&self) -> usize {
        self.pages.len().saturating_sub(1)
    }
}

impl<T: Clone> Carousel<T> {
    /// Click on the `slot`-th item of the current page.
    ///
    /// Uses the same interactivity filter as [`Carousel::drag_start`]:
    /// interactive targets handle their own clicks.
    pub fn click(&self, target: &PointerTarget, slot: usize) -> Option<CarouselEvent<T>> {
        if target.is_interactive() {
            return None;
        }
        self.current_items()
            .get(slot)
            .cloned()
            .map(CarouselEvent::ItemClicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::TargetKind;

    fn carousel(total: u32, per_page: usize) -> Carousel<u32> {
        let items: Arc<[u32]> = (0..total).collect();
        let mut carousel =
            Carousel::with_items(CarouselConfig::default().with_layout(per_page, 20), items);
        carousel.set_page_extent(1000.0);
        carousel
    }

    fn card() -> PointerTarget {
        PointerTarget::new(TargetKind::Card)
    }

    #[test]
    fn test_pages_and_marks_built_from_items() {
        let c = carousel(7, 3);
        assert_eq!(c.page_count(), 3);
        assert_eq!(c.page_marks(), &[0, 1, 2]);
        assert_eq!(c.current_items(), &[0, 1, 2]);
        assert_eq!(c.page_items(2), &[6]);
        assert!(c.page_items(3).is_empty());
    }

    #[test]
    fn test_go_to_next_at_last_page_is_noop() {
        let mut c = carousel(4, 2);
        assert_eq!(c.go_to_next(), Some(CarouselEvent::PageChanged(1)));
        assert_eq!(c.go_to_next(), None);
        assert_eq!(c.current_page(), 1);
        assert!(!c.can_go_next());
        assert!(c.can_go_previous());
    }

    #[test]
    fn test_go_to_previous_at_first_page_is_noop() {
        let mut c = carousel(4, 2);
        assert_eq!(c.go_to_previous(), None);
        assert_eq!(c.current_page(), 0);
        assert!(!c.can_go_previous());
    }

    #[test]
    fn test_go_to_page_ignores_out_of_range() {
        let mut c = carousel(9, 3);
        assert_eq!(c.go_to_page(3), None);
        assert_eq!(c.go_to_page(2), Some(CarouselEvent::PageChanged(2)));
        assert_eq!(c.current_items(), &[6, 7, 8]);
        assert_eq!(c.transform(), Transform::Percent(-200.0));
        assert!((c.translate() - -2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_page_changes_emitted_in_order() {
        let mut c = carousel(9, 3);
        let events: Vec<_> = [c.go_to_next(), c.go_to_next(), c.go_to_previous()]
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(
            events,
            vec![
                CarouselEvent::PageChanged(1),
                CarouselEvent::PageChanged(2),
                CarouselEvent::PageChanged(1),
            ]
        );
    }

    #[test]
    fn test_drag_past_threshold_commits_next_page() {
        let mut c = carousel(6, 2);
        assert!(c.drag_start(&card(), 500.0));
        c.drag_move(380.0);
        assert_eq!(c.transform(), Transform::Units(-120.0));
        assert_eq!(c.drag_offset(), Some(-120.0));

        assert_eq!(c.drag_end(), Some(CarouselEvent::PageChanged(1)));
        assert_eq!(c.current_page(), 1);
        assert!(!c.is_dragging());
        assert_eq!(c.transform(), Transform::Percent(-100.0));
        assert!((c.translate() - c.page_offset()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_below_threshold_snaps_back() {
        let mut c = carousel(6, 2);
        assert!(c.drag_start(&card(), 500.0));
        c.drag_move(450.0);
        assert_eq!(c.drag_end(), None);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.transform(), Transform::Percent(0.0));
        assert!(c.translate().abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_right_commits_previous_page() {
        let mut c = carousel(6, 2);
        c.go_to_page(2);
        assert!(c.drag_start(&card(), 100.0));
        c.drag_move(250.0);
        assert_eq!(c.drag_end(), Some(CarouselEvent::PageChanged(1)));
        assert!((c.translate() - -1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_next_on_last_page_is_capped() {
        let mut c = carousel(4, 2);
        c.go_to_page(1);
        assert!(c.drag_start(&card(), 500.0));
        c.drag_move(100.0);
        assert_eq!(c.drag_end(), None);
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.transform(), Transform::Percent(-100.0));
    }

    #[test]
    fn test_drag_overshoot_is_not_clamped() {
        let mut c = carousel(4, 2);
        assert!(c.drag_start(&card(), 0.0));
        c.drag_move(5000.0);
        assert_eq!(c.transform(), Transform::Units(5000.0));
    }

    #[test]
    fn test_interactive_target_never_starts_drag() {
        let mut c = carousel(4, 2);
        let link = PointerTarget::new(TargetKind::Card).nested(TargetKind::Link);
        assert!(!c.drag_start(&link, 500.0));
        assert!(!c.is_dragging());
        assert_eq!(c.frame_request(), None);

        // The click is left to the link itself.
        assert_eq!(c.click(&link, 0), None);

        c.drag_move(300.0);
        assert_eq!(c.drag_end(), None);
        assert_eq!(c.current_page(), 0);
    }

    #[test]
    fn test_drag_disabled_ignores_gestures() {
        let mut c = carousel(4, 2);
        c.set_config(CarouselConfig {
            drag_enabled: false,
            ..*c.config()
        });
        assert!(!c.drag_start(&card(), 500.0));
        assert_eq!(c.drag_end(), None);
    }

    #[test]
    fn test_disabling_drag_mid_gesture_snaps_back() {
        let mut c = carousel(4, 2);
        assert!(c.drag_start(&card(), 500.0));
        c.drag_move(100.0);
        c.set_config(CarouselConfig {
            drag_enabled: false,
            ..*c.config()
        });
        assert!(!c.is_dragging());
        assert_eq!(c.frame_request(), None);
        assert_eq!(c.current_page(), 0);
        assert!(c.translate().abs() < f64::EPSILON);
    }

    #[test]
    fn test_click_emits_item_for_plain_target() {
        let mut c = carousel(5, 2);
        c.go_to_next();
        assert_eq!(c.click(&card(), 1), Some(CarouselEvent::ItemClicked(3)));
        assert_eq!(c.click(&card(), 5), None);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let mut c: Carousel<u32> = Carousel::new(CarouselConfig::default());
        assert_eq!(c.page_count(), 0);
        assert!(c.page_marks().is_empty());
        assert!(c.current_items().is_empty());
        assert!(!c.can_go_previous());
        assert!(!c.can_go_next());
        assert_eq!(c.go_to_next(), None);
        assert_eq!(c.go_to_page(0), None);
        assert_eq!(c.transform(), Transform::Percent(0.0));
        assert_eq!(c.click(&card(), 0), None);
    }

    #[test]
    fn test_same_list_does_not_rebuild() {
        let items: Arc<[u32]> = (0..6).collect();
        let mut c =
            Carousel::with_items(CarouselConfig::default().with_layout(2, 0), Arc::clone(&items));
        c.go_to_page(2);
        c.set_items(Arc::clone(&items));
        assert_eq!(c.current_page(), 2);
        assert!(Arc::ptr_eq(c.items(), &items));
    }

    #[test]
    fn test_shrinking_list_clamps_current_page() {
        let mut c = carousel(9, 3);
        c.go_to_page(2);
        c.set_items((0..4).collect());
        assert_eq!(c.page_count(), 2);
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.current_items(), &[3]);

        c.set_items(Arc::from(Vec::new()));
        assert_eq!(c.current_page(), 0);
        assert!(c.current_items().is_empty());
    }

    #[test]
    fn test_page_size_change_keeps_first_visible_item() {
        let mut c = carousel(10, 2);
        c.go_to_page(3); // items 6, 7
        c.set_config(c.config().with_layout(4, 20));
        assert_eq!(c.items_per_page(), 4);
        assert_eq!(c.current_page(), 1); // items 4..8
        assert!(c.current_items().contains(&6));
        assert_eq!(c.page_marks(), &[0, 1, 2]);

        c.set_config(c.config().with_layout(1, 15));
        assert_eq!(c.current_page(), 4);
        assert_eq!(c.current_items(), &[4]);
    }

    #[test]
    fn test_zero_page_size_yields_no_pages() {
        let mut c = carousel(5, 2);
        c.set_config(c.config().with_layout(0, 20));
        assert_eq!(c.page_count(), 0);
        assert!(c.page_marks().is_empty());
        assert_eq!(c.current_page(), 0);
    }

    #[test]
    fn test_frame_request_lifecycle() {
        let mut c = carousel(4, 2);
        assert_eq!(c.frame_request(), None);
        assert_eq!(c.on_frame(), None);

        assert!(c.drag_start(&card(), 0.0));
        let first = c.frame_request().unwrap();
        let second = c.on_frame().unwrap();
        assert_ne!(first, second);

        c.drag_end();
        assert_eq!(c.frame_request(), None);

        assert!(c.drag_start(&card(), 0.0));
        c.teardown();
        assert_eq!(c.frame_request(), None);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_item_index_maps_slots() {
        let mut c = carousel(5, 2);
        c.go_to_page(2);
        assert_eq!(c.item_index(0), Some(4));
        assert_eq!(c.item_index(1), None);
    }
}
