use super::{grid_cells, period_cell, Frame};
use crate::state::{State, MONTH_COLUMNS};
use crate::timeline::{photos_in_month, Month};
use crate::ui::widgets::photo_stack::StackKey;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders},
};

/// Render the months view of the selected year as a grid of twelve cells.
///
pub fn months(frame: &mut Frame, size: Rect, year: i32, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(
            format!("{}", year),
            styling::active_block_title_style(),
        ));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let cells = grid_cells(inner, Month::ALL.len(), MONTH_COLUMNS);
    for (month, cell) in Month::ALL.iter().zip(cells) {
        let photos = photos_in_month(state.library().photos(), year, *month);
        period_cell(
            frame,
            cell,
            month.to_string(),
            &photos,
            StackKey::Month(year, *month),
            month.index() == state.cursor(),
            state,
        );
    }
}
