mod all;
mod days;
mod footer;
mod log;
mod months;
mod years;

use super::*;
use crate::state::State;
use crate::timeline::Photo;
use crate::ui::widgets::photo_stack::{PhotoStack, StackKey};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders},
};

pub use all::all as render;

/// Ticks over which a view slides into place.
///
const SLIDE_TICKS: usize = 5;

/// Columns the view moves per remaining slide tick.
///
const SLIDE_STEP: u16 = 3;

/// Return how far right a freshly entered view is drawn.
///
pub fn slide_offset(ticks: usize) -> u16 {
    (SLIDE_TICKS.saturating_sub(ticks) as u16) * SLIDE_STEP
}

/// Return how many thumbnails per stack are visible. Two more appear on every
/// tick after entering a view.
///
pub fn reveal_count(ticks: usize) -> usize {
    ticks.saturating_mul(2)
}

/// Split an area into a grid of `count` cells laid out in `columns` columns,
/// filled row by row.
///
pub fn grid_cells(area: Rect, count: usize, columns: usize) -> Vec<Rect> {
    if count == 0 || columns == 0 {
        return vec![];
    }
    let rows = count.div_ceil(columns);
    let cell_width = area.width / columns as u16;
    let cell_height = area.height / rows as u16;
    (0..count)
        .map(|i| {
            let column = (i % columns) as u16;
            let row = (i / columns) as u16;
            Rect::new(
                area.x + column * cell_width,
                area.y + row * cell_height,
                cell_width,
                cell_height,
            )
        })
        .collect()
}

/// Draw one bordered period cell with its photo stack.
///
fn period_cell(
    frame: &mut Frame,
    area: Rect,
    label: String,
    photos: &[&Photo],
    key: StackKey,
    selected: bool,
    state: &State,
) {
    let theme = state.get_theme();
    let (border_style, title_style) = if selected {
        (
            styling::active_block_border_style(theme),
            styling::cursor_style(theme),
        )
    } else {
        (
            styling::normal_block_border_style(theme),
            styling::label_style(theme),
        )
    };
    let title = if photos.is_empty() {
        label
    } else {
        format!("{} ({})", label, photos.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, title_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        PhotoStack::new(photos, key, state.jitter_seed(), theme)
            .revealed(reveal_count(state.transition_ticks())),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_offset_settles_at_zero() {
        assert_eq!(slide_offset(0), SLIDE_TICKS as u16 * SLIDE_STEP);
        assert!(slide_offset(2) < slide_offset(1));
        assert_eq!(slide_offset(SLIDE_TICKS), 0);
        assert_eq!(slide_offset(100), 0);
    }

    #[test]
    fn reveal_count_grows_with_ticks() {
        assert_eq!(reveal_count(0), 0);
        assert_eq!(reveal_count(3), 6);
        assert_eq!(reveal_count(usize::MAX), usize::MAX);
    }

    #[test]
    fn grid_cells_fill_rows_first() {
        let cells = grid_cells(Rect::new(0, 0, 40, 30), 12, 4);
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], Rect::new(0, 0, 10, 10));
        assert_eq!(cells[3], Rect::new(30, 0, 10, 10));
        assert_eq!(cells[4], Rect::new(0, 10, 10, 10));
        assert_eq!(cells[11], Rect::new(30, 20, 10, 10));
    }

    #[test]
    fn grid_cells_partial_last_row() {
        let cells = grid_cells(Rect::new(2, 1, 70, 25), 31, 7);
        assert_eq!(cells.len(), 31);
        assert_eq!(cells[30], Rect::new(2 + 2 * 10, 1 + 4 * 5, 10, 5));
        assert!(grid_cells(Rect::new(0, 0, 10, 10), 0, 7).is_empty());
    }
}
