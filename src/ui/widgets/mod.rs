//! Reusable UI widget components.
//!
//! This module contains the photo stack widget and styling utilities.

pub mod photo_stack;
pub mod styling;
