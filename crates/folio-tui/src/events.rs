//! UI event types.
//!
//! All external inputs (terminal, loaders, theme changes) are converted to
//! `UiEvent` before being processed by the reducer.
//!
//! ## Task Lifecycle Events
//!
//! Loaders use a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a loader is spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`

use crossterm::event::Event as CrosstermEvent;
use folio_core::services::{ContentSource, LoadedContent};
use folio_core::theme::{Appearance, ThemeMode};

use crate::common::{TaskCompleted, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner animation, system theme polling).
    Tick,

    /// Emitted once per frame before other events are processed.
    Frame { width: u16, height: u16 },

    /// Terminal input event (key, mouse, resize).
    Terminal(CrosstermEvent),

    /// A loader finished.
    ContentLoaded(LoadedContent),

    /// The theme store resolved a new appearance.
    ThemeApplied {
        mode: ThemeMode,
        appearance: Appearance,
    },

    /// Task lifecycle: runtime started a loader.
    TaskStarted {
        source: ContentSource,
        started: TaskStarted,
    },

    /// Task lifecycle: runtime completed a loader (wraps the result event).
    TaskCompleted {
        source: ContentSource,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
