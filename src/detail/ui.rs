//! Detail overlay - pure rendering layer.

use std::time::Instant;

use super::{panel_rect, DetailOverlay, DetailView, CLOSE_GLYPH};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the detail overlay and record the panel position for hit-testing.
pub fn draw_detail(
    f: &mut Frame<'_>,
    overlay: &mut DetailOverlay,
    view: &DetailView,
    colors: &ThemeColors,
    now: Instant,
) {
    let progress = overlay.progress(now);
    let area = panel_rect(f.area(), progress);
    overlay.set_panel(area);

    // Clear the background
    f.render_widget(Clear, area);

    let mut border_style = Style::default().fg(colors.border);
    let mut text_style = Style::default().fg(colors.text);
    if progress < 1.0 {
        border_style = border_style.add_modifier(Modifier::DIM);
        text_style = text_style.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .title(" Professor ")
        .title(Line::from(CLOSE_GLYPH).alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let paragraph = Paragraph::new(detail_lines(view, colors))
        .style(text_style)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, chunks[0]);

    draw_footer(f, chunks[1], colors);
}

fn detail_lines(view: &DetailView, colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            view.name.clone(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Class: ", &view.class_name, colors),
        field("Department: ", &view.department, colors),
        field("Average Grade: ", &view.avg_grade, colors),
    ];

    if let Some(ref rating) = view.rating {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            rating.clone(),
            Style::default().fg(colors.rating),
        )));
    }
    if let Some(ref id) = view.ratemyprof_id {
        lines.push(field("RateMyProf ID: ", id, colors));
    }

    lines
}

fn field(label: &'static str, value: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(colors.label)),
        Span::styled(value.to_string(), Style::default().fg(colors.value)),
    ])
}

fn draw_footer(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new("Esc/q: Close | Click ✕ or outside to close")
        .style(Style::default().fg(colors.label))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
