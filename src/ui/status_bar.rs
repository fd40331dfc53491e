//! Status bar UI component.

use crate::list::ListView;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    view: &ListView,
    colors: &ThemeColors,
) {
    let text = match view.filter {
        Some(ref query) if !view.search_active => format!("{} | filter: '{}'", status, query),
        _ => status.to_string(),
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
