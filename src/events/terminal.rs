use crate::config::hotkeys::{get_action, get_action_for_event};
use crate::config::HotkeyAction;
use crate::error::{AppError, AppResult};
use crate::state::State;
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
pub const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Outcome of handling one terminal event.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Flow {
    Continue,
    Exit,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns whether
    /// the application should keep running.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<Flow> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => {
                state.advance_tick();
                Ok(Flow::Continue)
            }
        }
    }
}

/// Apply a key press to the state.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> Flow {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return Flow::Exit;
    }

    if state.is_debug_mode() {
        match get_action(&key, &state.get_hotkeys().debug_mode) {
            Some(HotkeyAction::DebugNext) => {
                state.next_debug_entry();
            }
            Some(HotkeyAction::DebugPrev) => {
                state.previous_debug_entry();
            }
            Some(HotkeyAction::DebugCopy) => {
                if let Some(entry) = state.selected_debug_entry() {
                    match copy_to_clipboard(entry) {
                        Ok(()) => info!("Copied log entry to clipboard"),
                        Err(e) => warn!("{}", e),
                    }
                }
            }
            Some(HotkeyAction::DebugExit) => {
                debug!("Processing exit debug mode event '{:?}'...", key);
                state.exit_debug_mode();
            }
            _ => {}
        }
        return Flow::Continue;
    }

    match get_action_for_event(&key, state.level(), state.get_hotkeys()) {
        Some(HotkeyAction::Quit) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Flow::Exit;
        }
        Some(HotkeyAction::Select) => {
            state.select_current();
        }
        Some(HotkeyAction::Back) => {
            state.go_back();
        }
        Some(
            action @ (HotkeyAction::CursorLeft
            | HotkeyAction::CursorRight
            | HotkeyAction::CursorUp
            | HotkeyAction::CursorDown),
        ) => {
            state.move_cursor(action);
        }
        Some(HotkeyAction::CycleTheme) => {
            state.cycle_theme();
        }
        Some(HotkeyAction::EnterDebug) => {
            debug!("Processing enter debug mode event '{:?}'...", key);
            state.enter_debug_mode();
        }
        _ => {}
    }
    Flow::Continue
}

fn copy_to_clipboard(contents: String) -> AppResult<()> {
    let mut context: ClipboardContext =
        ClipboardProvider::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    context
        .set_contents(contents)
        .map_err(|e| AppError::Clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Level, NavigationState};
    use crate::timeline::Month;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_drive_drill_down() {
        let mut state = State::default();
        for code in [KeyCode::Right, KeyCode::Right, KeyCode::Enter] {
            assert_eq!(handle_key(press(code), &mut state), Flow::Continue);
        }
        assert_eq!(*state.navigation(), NavigationState::Months { year: 2023 });

        handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(
            *state.navigation(),
            NavigationState::Days {
                year: 2023,
                month: Month::Jan
            }
        );

        handle_key(press(KeyCode::Esc), &mut state);
        assert_eq!(*state.navigation(), NavigationState::Months { year: 2023 });
        handle_key(press(KeyCode::Backspace), &mut state);
        assert_eq!(state.level(), Level::Years);
    }

    #[test]
    fn quit_keys_exit() {
        let mut state = State::default();
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut state), Flow::Exit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, &mut state), Flow::Exit);
    }

    #[test]
    fn debug_mode_captures_navigation_keys() {
        let mut state = State::default();
        handle_key(press(KeyCode::Char('d')), &mut state);
        assert!(state.is_debug_mode());

        handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(state.level(), Level::Years);
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut state), Flow::Continue);

        handle_key(press(KeyCode::Esc), &mut state);
        assert!(!state.is_debug_mode());
    }

    #[test]
    fn theme_key_cycles_theme() {
        let mut state = State::default();
        let before = state.get_theme().name.clone();
        handle_key(press(KeyCode::Char('t')), &mut state);
        assert_ne!(state.get_theme().name, before);
    }
}
