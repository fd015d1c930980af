use crate::config::{HotkeyAction, ViewHotkeys};
use crate::logger::LogBuffer;
use crate::timeline::{days_in_month, Month, PhotoLibrary};
use crate::ui::Theme;
use log::*;

use super::navigation::{Level, NavigationState};

/// Columns of the months grid.
///
pub const MONTH_COLUMNS: usize = 4;

/// Columns of the days grid, one week per row.
///
pub const DAY_COLUMNS: usize = 7;

/// Houses data representative of application state.
///
pub struct State {
    library: PhotoLibrary,
    navigation: NavigationState,
    cursor: usize,
    transition_ticks: usize,
    jitter_seed: u64,
    debug_mode: bool,
    debug_index: usize,
    log_buffer: LogBuffer,
    theme: Theme,
    hotkeys: ViewHotkeys,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            library: PhotoLibrary::sample(),
            navigation: NavigationState::new(),
            cursor: 0,
            transition_ticks: 0,
            jitter_seed: 0,
            debug_mode: false,
            debug_index: 0,
            log_buffer: LogBuffer::new(),
            theme: Theme::default(),
            hotkeys: ViewHotkeys::default(),
        }
    }
}

impl State {
    pub fn new(
        library: PhotoLibrary,
        log_buffer: LogBuffer,
        theme: Theme,
        hotkeys: ViewHotkeys,
        jitter_seed: u64,
    ) -> Self {
        State {
            library,
            log_buffer,
            theme,
            hotkeys,
            jitter_seed,
            ..State::default()
        }
    }

    pub fn library(&self) -> &PhotoLibrary {
        &self.library
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn level(&self) -> Level {
        self.navigation.level()
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next built-in theme and return its name.
    ///
    pub fn cycle_theme(&mut self) -> &str {
        self.theme = self.theme.next();
        info!("Switched theme to {}", self.theme.name);
        &self.theme.name
    }

    pub fn get_hotkeys(&self) -> &ViewHotkeys {
        &self.hotkeys
    }

    pub fn jitter_seed(&self) -> u64 {
        self.jitter_seed
    }

    /// Advance the transition animation by one tick.
    ///
    pub fn advance_tick(&mut self) -> &mut Self {
        self.transition_ticks = self.transition_ticks.saturating_add(1);
        self
    }

    /// Ticks elapsed since the current view was entered.
    ///
    pub fn transition_ticks(&self) -> usize {
        self.transition_ticks
    }

    /// Return the index of the entry under the cursor.
    ///
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries shown at the current level.
    ///
    pub fn entry_count(&self) -> usize {
        match self.navigation {
            NavigationState::Years => self.library.years().len(),
            NavigationState::Months { .. } => Month::ALL.len(),
            NavigationState::Days { month, .. } => days_in_month(month) as usize,
        }
    }

    /// Number of grid columns at the current level.
    ///
    pub fn columns(&self) -> usize {
        match self.level() {
            Level::Years => self.library.years().len().max(1),
            Level::Months => MONTH_COLUMNS,
            Level::Days => DAY_COLUMNS,
        }
    }

    /// Move the cursor across the grid for the given movement action. Other
    /// actions are ignored.
    ///
    pub fn move_cursor(&mut self, action: HotkeyAction) -> &mut Self {
        let count = self.entry_count();
        if count == 0 {
            return self;
        }
        let columns = self.columns();
        self.cursor = match action {
            HotkeyAction::CursorLeft => self.cursor.saturating_sub(1),
            HotkeyAction::CursorRight => (self.cursor + 1).min(count - 1),
            HotkeyAction::CursorUp if self.cursor >= columns => self.cursor - columns,
            HotkeyAction::CursorDown if self.cursor + columns < count => self.cursor + columns,
            _ => self.cursor,
        };
        self
    }

    /// Drill into the entry under the cursor. Days are the deepest level, so
    /// selecting there does nothing.
    ///
    pub fn select_current(&mut self) -> &mut Self {
        match self.navigation {
            NavigationState::Years => {
                if let Some(year) = self.library.years().get(self.cursor).copied() {
                    self.navigation.select_year(year);
                    self.enter_view(0);
                }
            }
            NavigationState::Months { .. } => {
                if let Some(month) = Month::from_index(self.cursor) {
                    self.navigation.select_month(month);
                    self.enter_view(0);
                }
            }
            NavigationState::Days { .. } => {}
        }
        self
    }

    /// Step one level up, placing the cursor on the entry we came from.
    ///
    pub fn go_back(&mut self) -> &mut Self {
        let cursor = match self.navigation {
            NavigationState::Years => return self,
            NavigationState::Months { year } => self.library.year_index(year).unwrap_or(0),
            NavigationState::Days { month, .. } => month.index(),
        };
        self.navigation.go_back();
        self.enter_view(cursor);
        self
    }

    fn enter_view(&mut self, cursor: usize) {
        debug!("Entering {:?} view", self.navigation);
        self.cursor = cursor;
        self.transition_ticks = 0;
    }

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Enter debug mode with the newest log entry selected.
    ///
    pub fn enter_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = true;
        self.debug_index = self.log_buffer.len().saturating_sub(1);
        self
    }

    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = false;
        self
    }

    pub fn get_debug_entries(&self) -> Vec<String> {
        self.log_buffer.snapshot()
    }

    pub fn get_debug_index(&self) -> usize {
        self.debug_index
    }

    pub fn next_debug_entry(&mut self) -> &mut Self {
        let last = self.log_buffer.len().saturating_sub(1);
        self.debug_index = (self.debug_index + 1).min(last);
        self
    }

    pub fn previous_debug_entry(&mut self) -> &mut Self {
        self.debug_index = self.debug_index.saturating_sub(1);
        self
    }

    /// Return the log entry selected in debug mode.
    ///
    pub fn selected_debug_entry(&self) -> Option<String> {
        self.log_buffer.snapshot().get(self.debug_index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at_months(year: i32) -> State {
        let mut state = State::default();
        let index = state.library.year_index(year).unwrap();
        state.cursor = index;
        state.select_current();
        state
    }

    #[test]
    fn starts_at_years() {
        let state = State::default();
        assert_eq!(state.level(), Level::Years);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.entry_count(), 3);
    }

    #[test]
    fn select_current_year() {
        let state = state_at_months(2023);
        assert_eq!(*state.navigation(), NavigationState::Months { year: 2023 });
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.entry_count(), 12);
    }

    #[test]
    fn select_current_month() {
        let mut state = state_at_months(2023);
        state.move_cursor(HotkeyAction::CursorRight);
        state.select_current();
        assert_eq!(
            *state.navigation(),
            NavigationState::Days {
                year: 2023,
                month: Month::Feb
            }
        );
        assert_eq!(state.entry_count(), 28);
    }

    #[test]
    fn select_current_on_days_does_nothing() {
        let mut state = state_at_months(2022);
        state.select_current();
        let before = *state.navigation();
        state.move_cursor(HotkeyAction::CursorDown);
        state.select_current();
        assert_eq!(*state.navigation(), before);
        assert_eq!(state.cursor(), DAY_COLUMNS);
    }

    #[test]
    fn go_back_restores_cursor() {
        let mut state = state_at_months(2022);
        state.move_cursor(HotkeyAction::CursorDown);
        state.move_cursor(HotkeyAction::CursorRight);
        assert_eq!(state.cursor(), MONTH_COLUMNS + 1);
        state.select_current();
        assert_eq!(state.navigation().selected_month(), Some(Month::Jun));

        state.go_back();
        assert_eq!(state.level(), Level::Months);
        assert_eq!(state.cursor(), Month::Jun.index());

        state.go_back();
        assert_eq!(state.level(), Level::Years);
        assert_eq!(state.cursor(), 1);

        state.go_back();
        assert_eq!(state.level(), Level::Years);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn move_cursor_stays_in_grid() {
        let mut state = State::default();
        state.move_cursor(HotkeyAction::CursorLeft);
        assert_eq!(state.cursor(), 0);
        for _ in 0..5 {
            state.move_cursor(HotkeyAction::CursorRight);
        }
        assert_eq!(state.cursor(), 2);

        let mut state = state_at_months(2023);
        state.move_cursor(HotkeyAction::CursorUp);
        assert_eq!(state.cursor(), 0);
        for _ in 0..5 {
            state.move_cursor(HotkeyAction::CursorDown);
        }
        assert_eq!(state.cursor(), 2 * MONTH_COLUMNS);
    }

    #[test]
    fn view_change_restarts_transition() {
        let mut state = State::default();
        state.advance_tick().advance_tick();
        assert_eq!(state.transition_ticks(), 2);
        state.select_current();
        assert_eq!(state.transition_ticks(), 0);
        state.advance_tick();
        state.go_back();
        assert_eq!(state.transition_ticks(), 0);
    }

    #[test]
    fn debug_mode_navigation() {
        let buffer = LogBuffer::new();
        for entry in ["first", "second", "third"] {
            buffer.push(entry.to_string());
        }
        let mut state = State {
            log_buffer: buffer,
            ..State::default()
        };
        state.enter_debug_mode();
        assert!(state.is_debug_mode());
        assert_eq!(state.selected_debug_entry().as_deref(), Some("third"));
        state.next_debug_entry();
        assert_eq!(state.get_debug_index(), 2);
        state.previous_debug_entry().previous_debug_entry().previous_debug_entry();
        assert_eq!(state.selected_debug_entry().as_deref(), Some("first"));
        state.exit_debug_mode();
        assert!(!state.is_debug_mode());
    }

    #[test]
    fn cycle_theme() {
        let mut state = State::default();
        let name = state.cycle_theme().to_string();
        assert_eq!(name, Theme::default().next().name);
        assert_eq!(state.get_theme().name, name);
    }
}
