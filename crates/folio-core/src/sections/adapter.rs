//! Section adapter: one carousel, one responsive policy, one resize debouncer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{Debouncer, ResponsivePolicy, Section};
use crate::carousel::{Carousel, CarouselEvent, FrameRequest, PointerTarget, Transform};

/// Items that can be opened in a browser.
pub trait Linkable {
    /// Navigable URL, if the item has one.
    fn link(&self) -> Option<&str>;
}

/// Feeds a section's items and viewport-driven layout into its carousel.
#[derive(Debug)]
pub struct SectionAdapter<T> {
    section: Section,
    policy: ResponsivePolicy,
    carousel: Carousel<T>,
    resize: Debouncer<u32>,
    /// Last width seen from the viewport (applied or pending).
    seen_width: Option<u32>,
    applied_width: Option<u32>,
}

impl<T> SectionAdapter<T> {
    /// Quiet period before a resize burst is applied.
    pub const RESIZE_QUIET: Duration = Duration::from_millis(250);

    pub fn new(section: Section) -> Self {
        Self::with_debounce(section, Self::RESIZE_QUIET)
    }

    pub fn with_debounce(section: Section, quiet: Duration) -> Self {
        Self {
            section,
            policy: section.policy(),
            carousel: Carousel::new(section.default_config()),
            resize: Debouncer::new(quiet),
            seen_width: None,
            applied_width: None,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<T> {
        &mut self.carousel
    }

    pub fn items(&self) -> &Arc<[T]> {
        self.carousel.items()
    }

    pub fn set_items(&mut self, items: Arc<[T]>) {
        self.carousel.set_items(items);
    }

    /// Recomputes the layout for `width` right away.
    pub fn apply_width(&mut self, width: u32) {
        let layout = self.policy.resolve(width);
        let config = self
            .carousel
            .config()
            .with_layout(layout.items_per_page, layout.gap);
        self.carousel.set_config(config);
        self.carousel.set_page_extent(f64::from(width));
        self.seen_width = Some(width);
        self.applied_width = Some(width);
    }

    /// Viewport width changed.
    ///
    /// The first measurement is applied immediately; later ones wait for the
    /// quiet period so a burst collapses into a single re-chunk.
    pub fn on_resize(&mut self, width: u32, now: Instant) {
        if self.seen_width == Some(width) {
            return;
        }
        if self.applied_width.is_none() {
            self.apply_width(width);
            return;
        }
        self.seen_width = Some(width);
        self.resize.schedule(width, now);
    }

    /// Applies a debounced resize whose quiet period has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.resize.poll(now) {
            Some(width) => {
                self.apply_width(width);
                true
            }
            None => false,
        }
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    pub fn viewport_width(&self) -> Option<u32> {
        self.applied_width
    }

    /// Cancels the pending resize and any redraw scheduled by a drag.
    pub fn teardown(&mut self) {
        self.resize.cancel();
        self.carousel.teardown();
    }
}

impl<T: Clone> SectionAdapter<T> {
    /// Item clicked on the current page, filtered like drag-start.
    pub fn click(&self, target: &PointerTarget, slot: usize) -> Option<T> {
        match self.carousel.click(target, slot)? {
            CarouselEvent::ItemClicked(item) => Some(item),
            CarouselEvent::PageChanged(_) => None,
        }
    }
}

impl<T: Linkable> SectionAdapter<T> {
    /// URL to open for a click on the `slot`-th item of the current page.
    pub fn link_for(&self, target: &PointerTarget, slot: usize) -> Option<String> {
        if target.is_interactive() {
            return None;
        }
        self.carousel
            .current_items()
            .get(slot)
            .and_then(Linkable::link)
            .map(str::to_string)
    }
}

fn page_changed<T>(event: Option<CarouselEvent<T>>) -> Option<usize> {
    match event? {
        CarouselEvent::PageChanged(index) => Some(index),
        CarouselEvent::ItemClicked(_) => None,
    }
}

/// Item-type-agnostic view of a section adapter.
///
/// Lets the UI drive every section through one interface while the item
/// lists stay strongly typed. Navigation methods return the new page index
/// when a page change was committed.
pub trait PagedSection {
    fn section(&self) -> Section;
    fn item_count(&self) -> usize;
    fn items_per_page(&self) -> usize;
    fn gap(&self) -> u16;
    fn current_page(&self) -> usize;
    fn page_count(&self) -> usize;
    fn page_marks(&self) -> &[usize];
    /// Number of items on the current page.
    fn visible_count(&self) -> usize;
    fn visible_index(&self, slot: usize) -> Option<usize>;
    fn can_go_previous(&self) -> bool;
    fn can_go_next(&self) -> bool;
    fn transform(&self) -> Transform;
    fn drag_offset(&self) -> Option<f64>;
    fn is_dragging(&self) -> bool;
    fn frame_request(&self) -> Option<FrameRequest>;
    fn resize_pending(&self) -> bool;

    fn go_to_previous(&mut self) -> Option<usize>;
    fn go_to_next(&mut self) -> Option<usize>;
    fn go_to_page(&mut self, index: usize) -> Option<usize>;
    fn drag_start(&mut self, target: &PointerTarget, pos: f64) -> bool;
    fn drag_move(&mut self, pos: f64);
    fn drag_end(&mut self) -> Option<usize>;
    fn on_frame(&mut self) -> Option<FrameRequest>;
    fn on_resize(&mut self, width: u32, now: Instant);
    fn tick(&mut self, now: Instant) -> bool;
    fn teardown(&mut self);
}

impl<T> PagedSection for SectionAdapter<T> {
    fn section(&self) -> Section {
        self.section
    }

    fn item_count(&self) -> usize {
        self.carousel.items().len()
    }

    fn items_per_page(&self) -> usize {
        self.carousel.items_per_page()
    }

    fn gap(&self) -> u16 {
        self.carousel.config().gap
    }

    fn current_page(&self) -> usize {
        self.carousel.current_page()
    }

    fn page_count(&self) -> usize {
        self.carousel.page_count()
    }

    fn page_marks(&self) -> &[usize] {
        self.carousel.page_marks()
    }

    fn visible_count(&self) -> usize {
        self.carousel.current_items().len()
    }

    fn visible_index(&self, slot: usize) -> Option<usize> {
        self.carousel.item_index(slot)
    }

    fn can_go_previous(&self) -> bool {
        self.carousel.can_go_previous()
    }

    fn can_go_next(&self) -> bool {
        self.carousel.can_go_next()
    }

    fn transform(&self) -> Transform {
        self.carousel.transform()
    }

    fn drag_offset(&self) -> Option<f64> {
        self.carousel.drag_offset()
    }

    fn is_dragging(&self) -> bool {
        self.carousel.is_dragging()
    }

    fn frame_request(&self) -> Option<FrameRequest> {
        self.carousel.frame_request()
    }

    fn resize_pending(&self) -> bool {
        SectionAdapter::resize_pending(self)
    }

    fn go_to_previous(&mut self) -> Option<usize> {
        page_changed(self.carousel.go_to_previous())
    }

    fn go_to_next(&mut self) -> Option<usize> {
        page_changed(self.carousel.go_to_next())
    }

    fn go_to_page(&mut self, index: usize) -> Option<usize> {
        page_changed(self.carousel.go_to_page(index))
    }

    fn drag_start(&mut self, target: &PointerTarget, pos: f64) -> bool {
        self.carousel.drag_start(target, pos)
    }

    fn drag_move(&mut self, pos: f64) {
        self.carousel.drag_move(pos);
    }

    fn drag_end(&mut self) -> Option<usize> {
        page_changed(self.carousel.drag_end())
    }

    fn on_frame(&mut self) -> Option<FrameRequest> {
        self.carousel.on_frame()
    }

    fn on_resize(&mut self, width: u32, now: Instant) {
        SectionAdapter::on_resize(self, width, now);
    }

    fn tick(&mut self, now: Instant) -> bool {
        SectionAdapter::tick(self, now)
    }

    fn teardown(&mut self) {
        SectionAdapter::teardown(self);
    }
}
