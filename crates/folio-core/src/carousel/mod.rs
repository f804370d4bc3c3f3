//! Paginated, draggable carousel.
//!
//! ## Module Structure
//!
//! - `config.rs`: `CarouselConfig` (page size, gap, drag and auto-slide flags)
//! - `target.rs`: pointer targets and the interactivity filter
//! - `state.rs`: `Carousel<T>` state machine (navigation, drag, re-chunking)
//!
//! ## Notifications
//!
//! Operations return `Option<CarouselEvent<T>>` instead of invoking callbacks.
//! Callers forward the events wherever they need them, in the order the
//! operations were processed.

mod config;
mod state;
mod target;

pub use config::CarouselConfig;
pub use state::{Carousel, DRAG_THRESHOLD, FrameRequest, Transform};
pub use target::{PointerTarget, TargetKind};

/// Notifications emitted by the carousel.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent<T> {
    /// A non-interactive part of an item was clicked.
    ItemClicked(T),
    /// A navigation committed a new current page.
    PageChanged(usize),
}
