//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal layout (timeline view, log panel, footer)
//! - Theme management
//! - Widget components (photo stack, styling)
//! - The years, months and days views

type Frame<'a> = ratatui::Frame<'a>;

mod render;
pub mod theme;
mod widgets;

pub use render::render;
pub use theme::Theme;
