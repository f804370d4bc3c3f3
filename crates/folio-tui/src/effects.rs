//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! ## Cancellation
//!
//! A reload cancels the previous loader through `UiEffect::CancelTask`; the
//! runtime calls `token.cancel()` on the token the reducer stored.

use folio_core::services::ContentSource;
use folio_core::theme::ThemeMode;
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Open a URL in the system browser (or mail client, for `mailto:`).
    OpenBrowser { url: String },

    /// Load one content source in the background.
    LoadContent {
        task: Option<TaskId>,
        source: ContentSource,
    },

    /// Apply and persist a theme preference.
    SetTheme { mode: ThemeMode },

    /// Cancel an in-progress loader.
    CancelTask {
        source: ContentSource,
        token: Option<CancellationToken>,
    },
}
