//! Event handling module.
//!
//! Terminal events (key presses and animation ticks) are polled on a
//! background thread and applied to the state on the main thread.

pub mod terminal;
