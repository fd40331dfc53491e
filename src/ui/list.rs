//! Search box, toolbar and professor list rendering.

use super::{truncate_to_width, ThemeColors};
use crate::app::App;
use crate::list::{ListView, NoticeKind, ProfessorRow, RowView};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Lines per professor row: name and class, department, rating.
const ROW_HEIGHT: u16 = 3;

pub(super) fn draw_search(f: &mut Frame<'_>, area: Rect, view: &ListView, colors: &ThemeColors) {
    let (text, style) = if view.search_active {
        (
            format!("{}▏", view.search_text),
            Style::default().fg(colors.text),
        )
    } else if view.search_text.is_empty() {
        ("Search...".to_string(), Style::default().fg(colors.disabled))
    } else {
        (view.search_text.clone(), Style::default().fg(colors.text))
    };

    let border = if view.search_active {
        colors.heading
    } else {
        colors.border
    };

    let paragraph = Paragraph::new(text).style(style).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}

pub(super) fn draw_toolbar(f: &mut Frame<'_>, area: Rect, view: &ListView, colors: &ThemeColors) {
    let button_style = if view.refresh.enabled {
        Style::default()
            .fg(colors.cursor_fg)
            .bg(colors.cursor_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.disabled).bg(colors.status_bg)
    };

    let mut spans = vec![Span::styled(format!(" {} ", view.refresh.label), button_style)];

    if let Some(ref notice) = view.notice {
        let color = match notice.kind {
            NoticeKind::Success => colors.success,
            NoticeKind::Error => colors.error,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(notice.text.clone(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.bg));
    f.render_widget(paragraph, area);
}

pub(super) fn draw_list(
    f: &mut Frame<'_>,
    area: Rect,
    app: &mut App,
    view: &ListView,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(format!(" Professors - {} ", app.api_label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.row_hits.clear();

    let mut rows: Vec<&ProfessorRow> = Vec::new();
    for row in &view.rows {
        match row {
            RowView::Professor(row) => rows.push(row),
            RowView::Placeholder(text) | RowView::Empty(text) => {
                let paragraph = Paragraph::new(*text).style(Style::default().fg(colors.text));
                f.render_widget(paragraph, inner);
            },
        }
    }

    let visible = (inner.height / ROW_HEIGHT) as usize;
    app.adjust_scroll(visible);

    for (slot, row) in rows.iter().skip(app.list_scroll).take(visible).enumerate() {
        let rect = Rect {
            x: inner.x,
            y: inner.y + slot as u16 * ROW_HEIGHT,
            width: inner.width,
            height: ROW_HEIGHT,
        };
        f.render_widget(Paragraph::new(row_lines(row, inner.width as usize, colors)), rect);
        app.row_hits.push((rect, row.id));
    }
}

fn row_lines(row: &ProfessorRow, width: usize, colors: &ThemeColors) -> Vec<Line<'static>> {
    let base = if row.highlighted {
        Style::default().fg(colors.cursor_fg).bg(colors.cursor_bg)
    } else {
        Style::default().fg(colors.text)
    };
    let (accent, muted) = if row.highlighted {
        (base, base)
    } else {
        (base.fg(colors.rating), base.fg(colors.label))
    };

    let tag = format!(" [{}]", row.class_name);
    let name_width = width.saturating_sub(tag.width());
    let name = truncate_to_width(&row.name, name_width);
    let pad = " ".repeat(width.saturating_sub(name.width() + tag.width()));

    let department = truncate_to_width(&format!("  {}", row.department), width);
    let rating = row
        .rating
        .as_ref()
        .map(|r| truncate_to_width(&format!("  {}", r), width))
        .unwrap_or_default();

    vec![
        Line::from(vec![
            Span::styled(name, base.add_modifier(Modifier::BOLD)),
            Span::styled(tag, accent),
            Span::styled(pad, base),
        ]),
        Line::styled(pad_to(department, width), muted),
        Line::styled(pad_to(rating, width), accent),
    ]
}

fn pad_to(text: String, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
