//! Feature modules: one per page area.
//!
//! - `header`: tabs and theme button
//! - `about`: personal info and social links
//! - `sections`: carousel sections

pub mod about;
pub mod header;
pub mod sections;
