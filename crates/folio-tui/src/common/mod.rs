//! Shared leaf types for TUI features.
//!
//! Contains types with no feature dependencies (tasks, text helpers, links).
//!
//! IMPORTANT: This module must NOT import UiEvent or feature-specific state
//! to avoid circular dependencies.

pub mod links;
pub mod task;
pub mod text;

pub use links::openable_url;
pub use task::{TaskCompleted, TaskId, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text::{sanitize_for_display, truncate_with_ellipsis};
