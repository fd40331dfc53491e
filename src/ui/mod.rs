//! User interface rendering.
//!
//! Every frame is drawn from the [`ListView`](crate::list::ListView)
//! projection; the only state written back is geometry needed for mouse
//! hit-testing.

mod formatters;
mod keymap_bar;
mod list;
mod status_bar;
mod theme;

use std::time::Instant;

use crate::app::App;
use crate::detail::ui::draw_detail;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use formatters::truncate_to_width;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let view = crate::list::view(&app.list, &app.search);

    // Search box, toolbar, list, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    list::draw_search(f, chunks[0], &view, &colors);
    list::draw_toolbar(f, chunks[1], &view, &colors);
    list::draw_list(f, chunks[2], app, &view, &colors);
    status_bar::draw_status(f, chunks[3], &app.status, &view, &colors);
    keymap_bar::draw_keymap(f, chunks[4], &view, &colors);

    if let Some(ref detail) = view.detail {
        draw_detail(f, &mut app.detail, detail, &colors, Instant::now());
    }
}
