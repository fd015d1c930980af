use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let entries = state.get_debug_entries();

    if state.is_debug_mode() {
        let block = Block::default()
            .title(Span::styled(
                "Log (debug mode)",
                styling::active_block_title_style(),
            ))
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme));
        let items: Vec<ListItem> = entries.into_iter().map(ListItem::new).collect();
        let list = List::new(items)
            .style(styling::normal_text_style(theme))
            .highlight_style(styling::cursor_style(theme))
            .block(block);

        let mut list_state = ListState::default();
        list_state.select(Some(state.get_debug_index()));
        frame.render_stateful_widget(list, size, &mut list_state);
    } else {
        // Newest entries at the bottom, oldest scrolled out of view
        let block = Block::default()
            .title("Log")
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme));
        let visible = size.height.saturating_sub(2) as usize;
        let skip = entries.len().saturating_sub(visible);
        let items: Vec<ListItem> = entries.into_iter().skip(skip).map(ListItem::new).collect();
        let list = List::new(items)
            .style(styling::muted_text_style(theme))
            .block(block);
        frame.render_widget(list, size);
    }
}
