//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - The drill-down `NavigationState` machine and its `Level`
//! - Main `State` struct that holds the navigation, cursor, animation and log state

mod navigation;

pub use navigation::{Level, NavigationState};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, DAY_COLUMNS, MONTH_COLUMNS};
