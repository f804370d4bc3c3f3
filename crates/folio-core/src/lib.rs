//! Core folio library (carousel engine, sections, content loaders, config).

pub mod carousel;
pub mod config;
pub mod content;
pub mod format;
pub mod logging;
pub mod pagination;
pub mod sections;
pub mod services;
pub mod theme;
