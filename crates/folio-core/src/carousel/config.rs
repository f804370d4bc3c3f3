use std::time::Duration;

/// Per-instance carousel configuration.
///
/// Replaced wholesale when the viewport changes; never patched field by field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Items grouped into one page. Zero yields no pages.
    pub items_per_page: usize,
    /// Spacing between cards, in display units.
    pub gap: u16,
    pub auto_slide: bool,
    pub auto_slide_interval: Duration,
    /// Whether pointer drags may change the page.
    pub drag_enabled: bool,
}

impl CarouselConfig {
    const DEFAULT_ITEMS_PER_PAGE: usize = 3;
    const DEFAULT_GAP: u16 = 20;
    const DEFAULT_AUTO_SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

    /// Returns a copy with a new page size and gap, keeping the other flags.
    #[must_use]
    pub fn with_layout(self, items_per_page: usize, gap: u16) -> Self {
        Self {
            items_per_page,
            gap,
            ..self
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items_per_page: Self::DEFAULT_ITEMS_PER_PAGE,
            gap: Self::DEFAULT_GAP,
            auto_slide: false,
            auto_slide_interval: Self::DEFAULT_AUTO_SLIDE_INTERVAL,
            drag_enabled: true,
        }
    }
}
