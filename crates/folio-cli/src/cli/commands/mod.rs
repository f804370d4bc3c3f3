pub mod config;
pub mod pages;
pub mod theme;
pub mod view;
