//! Effect handlers: async work the runtime spawns.
//!
//! Handlers return the result as a `UiEvent`; they never touch state.

use std::sync::Arc;

use folio_core::services::{ContentServices, ContentSource};
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

/// Loads one content source. Returns `None` when cancelled first.
pub async fn load_content(
    services: Arc<ContentServices>,
    source: ContentSource,
    cancel: Option<CancellationToken>,
) -> Option<UiEvent> {
    let load = services.load(source);
    let content = match cancel {
        Some(token) => tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::debug!(%source, "loader cancelled");
                return None;
            }
            content = load => content,
        },
        None => load.await,
    };
    Some(UiEvent::ContentLoaded(content))
}
