use super::footer::footer;
use super::log::log;
use super::{days::days, months::months, years::years, Frame};
use crate::state::{NavigationState, State};
use ratatui::layout::{Constraint, Direction, Layout};

/// Height of the log panel including borders.
///
const LOG_HEIGHT: u16 = 7;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(LOG_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.size());

    match *state.navigation() {
        NavigationState::Years => years(frame, rows[0], state),
        NavigationState::Months { year } => months(frame, rows[0], year, state),
        NavigationState::Days { year, month } => days(frame, rows[0], year, month, state),
    }
    log(frame, rows[1], state);
    footer(frame, rows[2], state);
}
