use super::Frame;
use crate::config::hotkeys::build_footer_text;
use crate::config::HotkeyAction;
use crate::state::{Level, NavigationState, State};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the drill-down path shown at the left of the footer.
///
pub fn breadcrumb(navigation: &NavigationState) -> String {
    match navigation {
        NavigationState::Years => "Years".to_string(),
        NavigationState::Months { year } => format!("Years › {}", year),
        NavigationState::Days { year, month } => format!("Years › {} › {}", year, month),
    }
}

/// Format hotkeys for the current level or mode as a display string.
///
fn hints(state: &State) -> String {
    let hotkeys = state.get_hotkeys();
    if state.is_debug_mode() {
        return build_footer_text(
            &hotkeys.debug_mode,
            &[
                (HotkeyAction::DebugNext, "navigate", Some(HotkeyAction::DebugPrev)),
                (HotkeyAction::DebugCopy, "copy", None),
                (HotkeyAction::DebugExit, "exit debug", None),
            ],
        );
    }

    let bindings = hotkeys.for_level(state.level());
    let back = match state.level() {
        Level::Years => None,
        Level::Months => Some((HotkeyAction::Back, "back to years", None)),
        Level::Days => Some((HotkeyAction::Back, "back to months", None)),
    };
    let actions: Vec<(HotkeyAction, &str, Option<HotkeyAction>)> = [
        Some((HotkeyAction::CursorLeft, "move", Some(HotkeyAction::CursorRight))),
        Some((HotkeyAction::Select, "open", None)),
        back,
        Some((HotkeyAction::CycleTheme, "theme", None)),
        Some((HotkeyAction::EnterDebug, "log", None)),
        Some((HotkeyAction::Quit, "quit", None)),
    ]
    .into_iter()
    .flatten()
    .collect();
    build_footer_text(bindings, &actions)
}

/// Render footer according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let (mode, mode_color) = if state.is_debug_mode() {
        (" DEBUG ", theme.footer_debug.to_color())
    } else {
        (" BROWSE ", theme.primary.to_color())
    };
    let crumbs = format!(" {} ", breadcrumb(state.navigation()));

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((mode.chars().count() + crumbs.chars().count()) as u16),
            Constraint::Min(0),
        ])
        .split(size);

    let left = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.footer_normal.to_color())
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            crumbs,
            Style::default()
                .fg(theme.text.to_color())
                .bg(theme.highlight_bg.to_color()),
        ),
    ]);
    frame.render_widget(Paragraph::new(left), columns[0]);

    let right = Paragraph::new(hints(state))
        .style(Style::default().fg(theme.text_muted.to_color()));
    frame.render_widget(right, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Month;

    #[test]
    fn breadcrumb_follows_navigation() {
        let mut navigation = NavigationState::new();
        assert_eq!(breadcrumb(&navigation), "Years");
        navigation.select_year(2023);
        assert_eq!(breadcrumb(&navigation), "Years › 2023");
        navigation.select_month(Month::Jan);
        assert_eq!(breadcrumb(&navigation), "Years › 2023 › Jan");
    }

    #[test]
    fn hints_depend_on_level() {
        let mut state = State::default();
        let years = hints(&state);
        assert!(years.contains("Enter: open"));
        assert!(!years.contains("back"));

        state.select_current().select_current();
        let days = hints(&state);
        assert!(days.contains("Esc: back to months"));
        assert!(!days.contains("open"));
    }

    #[test]
    fn hints_in_debug_mode() {
        let mut state = State::default();
        state.enter_debug_mode();
        let text = hints(&state);
        assert!(text.contains("y: copy"));
        assert!(text.contains("exit debug"));
    }
}
