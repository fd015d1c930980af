//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings per drill-down level, and the footer hints built from them.

use crate::state::Level;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Cursor movement
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,

    // Drill-down
    Select,
    Back,

    // Global
    Quit,
    CycleTheme,
    EnterDebug,

    // Debug mode
    DebugNext,
    DebugPrev,
    DebugCopy,
    DebugExit,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HotkeySpec", into = "HotkeySpec")]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    /// Return an unmodified hotkey for the given key code.
    ///
    pub fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn char(c: char) -> Self {
        Hotkey::plain(KeyCode::Char(c))
    }
}

/// On-disk form of a hotkey.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HotkeySpec {
    code: KeyName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    char: Option<char>,
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

/// Key codes that can be bound.
///
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyName {
    Char,
    Esc,
    Enter,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl From<Hotkey> for HotkeySpec {
    fn from(hotkey: Hotkey) -> Self {
        let (code, char) = match hotkey.code {
            KeyCode::Char(c) => (KeyName::Char, Some(c)),
            KeyCode::Esc => (KeyName::Esc, None),
            KeyCode::Enter => (KeyName::Enter, None),
            KeyCode::Backspace => (KeyName::Backspace, None),
            KeyCode::Up => (KeyName::Up, None),
            KeyCode::Down => (KeyName::Down, None),
            KeyCode::Left => (KeyName::Left, None),
            KeyCode::Right => (KeyName::Right, None),
            // Unsupported keys are never produced by the defaults
            _ => (KeyName::Esc, None),
        };
        HotkeySpec {
            code,
            char,
            control: hotkey.modifiers.contains(KeyModifiers::CONTROL),
            shift: hotkey.modifiers.contains(KeyModifiers::SHIFT),
            alt: hotkey.modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl TryFrom<HotkeySpec> for Hotkey {
    type Error = String;

    fn try_from(spec: HotkeySpec) -> Result<Self, Self::Error> {
        let code = match spec.code {
            KeyName::Char => match spec.char {
                Some(c) => KeyCode::Char(c),
                None => return Err("Char key code requires 'char' field".to_string()),
            },
            KeyName::Esc => KeyCode::Esc,
            KeyName::Enter => KeyCode::Enter,
            KeyName::Backspace => KeyCode::Backspace,
            KeyName::Up => KeyCode::Up,
            KeyName::Down => KeyCode::Down,
            KeyName::Left => KeyCode::Left,
            KeyName::Right => KeyCode::Right,
        };
        let mut modifiers = KeyModifiers::empty();
        if spec.control {
            modifiers |= KeyModifiers::CONTROL;
        }
        if spec.shift {
            modifiers |= KeyModifiers::SHIFT;
        }
        if spec.alt {
            modifiers |= KeyModifiers::ALT;
        }
        Ok(Hotkey { code, modifiers })
    }
}

/// An action may be bound to several keys (e.g. `h` and Left).
///
pub type Bindings = HashMap<HotkeyAction, Vec<Hotkey>>;

/// Maps hotkey actions to their key bindings for each level and mode.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewHotkeys {
    #[serde(default = "years_hotkeys")]
    pub years: Bindings,
    #[serde(default = "months_hotkeys")]
    pub months: Bindings,
    #[serde(default = "days_hotkeys")]
    pub days: Bindings,
    #[serde(default = "debug_mode_hotkeys")]
    pub debug_mode: Bindings,
}

impl Default for ViewHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

/// Returns default hotkey mappings for all levels.
///
pub fn default_hotkeys() -> ViewHotkeys {
    ViewHotkeys {
        years: years_hotkeys(),
        months: months_hotkeys(),
        days: days_hotkeys(),
        debug_mode: debug_mode_hotkeys(),
    }
}

fn global_hotkeys() -> Bindings {
    let mut bindings = Bindings::new();
    bindings.insert(HotkeyAction::Quit, vec![Hotkey::char('q')]);
    bindings.insert(HotkeyAction::CycleTheme, vec![Hotkey::char('t')]);
    bindings.insert(HotkeyAction::EnterDebug, vec![Hotkey::char('d')]);
    bindings.insert(
        HotkeyAction::Select,
        vec![Hotkey::plain(KeyCode::Enter), Hotkey::char(' ')],
    );
    bindings.insert(
        HotkeyAction::CursorLeft,
        vec![Hotkey::char('h'), Hotkey::plain(KeyCode::Left)],
    );
    bindings.insert(
        HotkeyAction::CursorRight,
        vec![Hotkey::char('l'), Hotkey::plain(KeyCode::Right)],
    );
    bindings
}

fn grid_hotkeys() -> Bindings {
    let mut bindings = global_hotkeys();
    bindings.insert(
        HotkeyAction::CursorUp,
        vec![Hotkey::char('k'), Hotkey::plain(KeyCode::Up)],
    );
    bindings.insert(
        HotkeyAction::CursorDown,
        vec![Hotkey::char('j'), Hotkey::plain(KeyCode::Down)],
    );
    bindings.insert(
        HotkeyAction::Back,
        vec![Hotkey::plain(KeyCode::Esc), Hotkey::plain(KeyCode::Backspace)],
    );
    bindings
}

fn years_hotkeys() -> Bindings {
    global_hotkeys()
}

fn months_hotkeys() -> Bindings {
    grid_hotkeys()
}

fn days_hotkeys() -> Bindings {
    let mut bindings = grid_hotkeys();
    // Days are the deepest level
    bindings.remove(&HotkeyAction::Select);
    bindings
}

fn debug_mode_hotkeys() -> Bindings {
    let mut bindings = Bindings::new();
    bindings.insert(
        HotkeyAction::DebugNext,
        vec![Hotkey::char('j'), Hotkey::plain(KeyCode::Down)],
    );
    bindings.insert(
        HotkeyAction::DebugPrev,
        vec![Hotkey::char('k'), Hotkey::plain(KeyCode::Up)],
    );
    bindings.insert(HotkeyAction::DebugCopy, vec![Hotkey::char('y')]);
    bindings.insert(
        HotkeyAction::DebugExit,
        vec![Hotkey::plain(KeyCode::Esc), Hotkey::char('d')],
    );
    bindings
}

impl ViewHotkeys {
    /// Return the bindings active at the given level.
    ///
    pub fn for_level(&self, level: Level) -> &Bindings {
        match level {
            Level::Years => &self.years,
            Level::Months => &self.months,
            Level::Days => &self.days,
        }
    }
}

/// Checks if a KeyEvent matches a Hotkey. Shift is ignored for characters
/// since the character itself already carries the case.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    if event.code != hotkey.code {
        return false;
    }
    match event.code {
        KeyCode::Char(_) => {
            event.modifiers.difference(KeyModifiers::SHIFT)
                == hotkey.modifiers.difference(KeyModifiers::SHIFT)
        }
        _ => event.modifiers == hotkey.modifiers,
    }
}

/// Gets the action bound to a KeyEvent in the given bindings.
///
pub fn get_action(event: &KeyEvent, bindings: &Bindings) -> Option<HotkeyAction> {
    bindings
        .iter()
        .find(|(_, hotkeys)| hotkeys.iter().any(|hotkey| matches_hotkey(event, hotkey)))
        .map(|(action, _)| *action)
}

/// Gets the action for a KeyEvent at a specific level.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    level: Level,
    hotkeys: &ViewHotkeys,
) -> Option<HotkeyAction> {
    get_action(event, hotkeys.for_level(level))
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &Bindings,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let first = |action: &HotkeyAction| hotkeys.get(action).and_then(|keys| keys.first());
    actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = first(action)?;
            let keys = match paired_action.as_ref().and_then(first) {
                Some(paired) => format!(
                    "{}/{}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired)
                ),
                None => format_hotkey_display(hotkey),
            };
            Some(format!(" {}: {}", keys, description))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
