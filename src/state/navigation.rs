//! Navigation-related state types.
//!
//! This module contains the drill-down state machine that decides which view
//! is shown. Selections live inside the variants, so a month can never be
//! selected without a year and the years view never carries a selection.
//!
//! ```text
//!   Years ──select_year──► Months(y) ──select_month──► Days(y, m)
//!     ▲                      │  ▲                        │
//!     └──────go_back─────────┘  └─────────go_back────────┘
//! ```

use crate::timeline::Month;
use log::*;

/// Specifying the different drill-down levels.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Level {
    Years,
    Months,
    Days,
}

/// Current drill-down position and the selections that lead to it.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum NavigationState {
    #[default]
    Years,
    Months {
        year: i32,
    },
    Days {
        year: i32,
        month: Month,
    },
}

impl NavigationState {
    /// Return the initial state of a session.
    ///
    pub fn new() -> Self {
        NavigationState::Years
    }

    pub fn level(&self) -> Level {
        match self {
            NavigationState::Years => Level::Years,
            NavigationState::Months { .. } => Level::Months,
            NavigationState::Days { .. } => Level::Days,
        }
    }

    pub fn selected_year(&self) -> Option<i32> {
        match self {
            NavigationState::Years => None,
            NavigationState::Months { year } | NavigationState::Days { year, .. } => Some(*year),
        }
    }

    pub fn selected_month(&self) -> Option<Month> {
        match self {
            NavigationState::Days { month, .. } => Some(*month),
            _ => None,
        }
    }

    /// Drill into the given year from any state, dropping a selected month.
    ///
    pub fn select_year(&mut self, year: i32) -> &mut Self {
        debug!("Selecting year {}...", year);
        *self = NavigationState::Months { year };
        self
    }

    /// Drill into the given month of the selected year. Without a selected
    /// year the state is left unchanged.
    ///
    pub fn select_month(&mut self, month: Month) -> &mut Self {
        match self.selected_year() {
            Some(year) => {
                debug!("Selecting month {} {}...", month, year);
                *self = NavigationState::Days { year, month };
            }
            None => warn!("Ignoring selection of month {} with no year selected", month),
        }
        self
    }

    /// Step one level up. Going back from the years view does nothing.
    ///
    pub fn go_back(&mut self) -> &mut Self {
        *self = match *self {
            NavigationState::Days { year, .. } => NavigationState::Months { year },
            NavigationState::Months { .. } => NavigationState::Years,
            NavigationState::Years => NavigationState::Years,
        };
        self
    }
}
