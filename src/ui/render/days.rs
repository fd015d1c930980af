use super::{grid_cells, period_cell, Frame};
use crate::state::{State, DAY_COLUMNS};
use crate::timeline::{day_buckets, Month, Photo};
use crate::ui::widgets::photo_stack::StackKey;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// Return the summary line for the day under the cursor.
///
pub fn day_summary(day: u32, month: Month, year: i32, photos: &[&Photo]) -> String {
    let heading = format!("{} {} {}", day, month, year);
    match photos.len() {
        0 => format!("{}: no photos", heading),
        count => {
            let refs: Vec<String> = photos
                .iter()
                .map(|p| format!("#{} {}", p.id, p.image_ref))
                .collect();
            let noun = if count == 1 { "photo" } else { "photos" };
            format!("{}: {} {}: {}", heading, count, noun, refs.join(", "))
        }
    }
}

/// Render the days view of the selected month, one cell per day.
///
pub fn days(frame: &mut Frame, size: Rect, year: i32, month: Month, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(
            format!("{} {}", month, year),
            styling::active_block_title_style(),
        ));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let buckets = day_buckets(state.library().photos(), year, month);
    let cells = grid_cells(rows[0], buckets.len(), DAY_COLUMNS);
    for (i, ((day, photos), cell)) in buckets.iter().zip(cells).enumerate() {
        period_cell(
            frame,
            cell,
            day.to_string(),
            photos,
            StackKey::Day(year, month, *day),
            i == state.cursor(),
            state,
        );
    }

    if let Some((day, photos)) = buckets.get(state.cursor()) {
        let summary = Paragraph::new(day_summary(*day, month, year, photos))
            .style(styling::normal_text_style(theme));
        frame.render_widget(summary, rows[1]);
    }
}
