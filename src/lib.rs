//! Terminal photo timeline browser.
//!
//! Photos are browsed by drilling down from years to months to days, each
//! period showing its photos as a small scattered stack of thumbnails.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod timeline;
pub mod ui;
