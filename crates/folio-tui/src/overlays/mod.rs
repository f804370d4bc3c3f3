//! Modal overlays.
//!
//! Overlays temporarily take over keyboard and mouse input. Each overlay is
//! self-contained: it owns its state, key handler and render function.
//!
//! ## Module Structure
//!
//! - `theme_picker.rs`: light / dark / auto selection
//! - `video_detail.rs`: video metadata and watch button
//! - `notice.rs`: informational popup (Discord "coming soon")
//! - `render_utils.rs`: shared container, hints and button rendering

pub mod notice;
pub mod render_utils;
pub mod theme_picker;
pub mod video_detail;

use crossterm::event::KeyEvent;
pub use notice::NoticeState;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use theme_picker::ThemePickerState;
pub use video_detail::VideoDetailState;

use crate::effects::UiEffect;
use crate::hit::{HitMap, HitTarget};
use crate::palette::Palette;

// ============================================================================
// OverlayTransition / OverlayUpdate
// ============================================================================

/// Transition returned by overlay handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    ThemePicker(ThemePickerState),
    VideoDetail(VideoDetailState),
    Notice(NoticeState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, hits: &mut HitMap) {
        match self {
            Overlay::ThemePicker(p) => p.render(frame, area, palette, hits),
            Overlay::VideoDetail(v) => v.render(frame, area, palette, hits),
            Overlay::Notice(n) => n.render(frame, area, palette, hits),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::ThemePicker(p) => p.handle_key(key),
            Overlay::VideoDetail(v) => v.handle_key(key),
            Overlay::Notice(n) => n.handle_key(key),
        }
    }

    /// Click while the overlay is open.
    ///
    /// Clicks outside the popup dismiss it; clicks on the popup body do nothing.
    pub fn handle_click(&mut self, target: Option<HitTarget>) -> OverlayUpdate {
        match (self, target) {
            (_, Some(HitTarget::Overlay)) => OverlayUpdate::stay(),
            (Overlay::ThemePicker(p), Some(HitTarget::OverlayOption(index))) => {
                p.click_option(index)
            }
            (Overlay::VideoDetail(v), Some(HitTarget::OverlayButton)) => v.watch(),
            (Overlay::Notice(_), Some(HitTarget::OverlayButton)) => OverlayUpdate::close(),
            (_, Some(HitTarget::OverlayButton | HitTarget::OverlayOption(_))) => {
                OverlayUpdate::stay()
            }
            (_, _) => OverlayUpdate::close(),
        }
    }
}

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, hits: &mut HitMap);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette, hits: &mut HitMap) {
        if let Some(overlay) = self {
            overlay.render(frame, area, palette, hits);
        }
    }
}

/// Routes a key to the active overlay. Returns `None` when no overlay is open.
pub fn handle_overlay_key(overlay: &mut Option<Overlay>, key: KeyEvent) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|o| o.handle_key(key))
}

/// Applies an overlay transition and returns its effects.
pub fn apply_overlay_update(overlay: &mut Option<Overlay>, update: OverlayUpdate) -> Vec<UiEffect> {
    if matches!(update.transition, OverlayTransition::Close) {
        *overlay = None;
    }
    update.effects
}
