pub mod clipboard;
pub mod commands;
pub mod completions;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod models;
pub mod tui;
pub mod utils;
pub mod view;

/// Mark shown next to the title in the browser header.
pub const LOGO: &str = "\u{271D}";
