//! Keymap help bar UI component.

use crate::list::ListView;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, view: &ListView, colors: &ThemeColors) {
    let keymap_text = if view.detail.is_some() {
        "Esc/q/Enter:close | click outside:close"
    } else if view.search_active {
        "Enter:search | Esc:cancel | Type to search"
    } else if view.filter.is_some() {
        "q:quit | jk:nav | Enter:open | /:search | Esc:clear filter | r:refresh | y:copy | x:dismiss | T:theme"
    } else {
        "q:quit | jk:nav | g/G:first/last | Enter:open | /:search | r:refresh | y:copy | x:dismiss | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
