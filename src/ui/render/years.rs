use super::{period_cell, slide_offset, Frame};
use crate::state::State;
use crate::timeline::photos_in_year;
use crate::ui::widgets::photo_stack::StackKey;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "Photo Timeline";

pub const BANNER: &str = r"
 ┌─┐┬ ┬┌─┐┌┬┐┌─┐  ┌┬┐┬┌┬┐┌─┐┬  ┬┌┐┌┌─┐
 ├─┘├─┤│ │ │ │ │   │ ││││├┤ │  ││││├┤
 ┴  ┴ ┴└─┘ ┴ └─┘   ┴ ┴┴ ┴└─┘┴─┘┴┘└┘└─┘
";

/// Widest a year column is drawn.
///
const MAX_COLUMN_WIDTH: u16 = 28;

/// Render the years view: one column per offered year, side by side.
///
pub fn years(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(BLOCK_TITLE)
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(inner);

    let banner = Paragraph::new(Text::from(BANNER))
        .style(styling::banner_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(banner, rows[0]);

    let years = state.library().years();
    if years.is_empty() {
        frame.render_widget(
            Paragraph::new("No years to show")
                .style(styling::muted_text_style(theme))
                .alignment(Alignment::Center),
            rows[1],
        );
        return;
    }

    // Slide in from the left, centred once settled
    let count = years.len() as u16;
    let column_width = (rows[1].width / count).min(MAX_COLUMN_WIDTH);
    let total_width = column_width * count;
    let offset = slide_offset(state.transition_ticks());
    let x = rows[1].x + (rows[1].width - total_width) / 2;
    let x = x.saturating_sub(offset).max(rows[1].x);
    let row = Rect::new(x, rows[1].y, total_width, rows[1].height);

    let cells = super::grid_cells(row, years.len(), years.len());
    for (i, (year, cell)) in years.iter().zip(cells).enumerate() {
        let photos = photos_in_year(state.library().photos(), *year);
        period_cell(
            frame,
            cell,
            year.to_string(),
            &photos,
            StackKey::Year(*year),
            i == state.cursor(),
            state,
        );
    }
}
