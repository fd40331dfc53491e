//! Application state and logic.

use std::time::Instant;

use ratatui::layout::{Position, Rect};

use crate::clipboard;
use crate::data::ProfessorId;
use crate::detail::{DetailOverlay, OverlayClick};
use crate::list::{Event, ListState};
use crate::runtime::Runtime;
use crate::search::SearchInput;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// List controller state.
    pub list: ListState,
    /// Search input.
    pub search: SearchInput,
    /// Detail overlay geometry and transition.
    pub detail: DetailOverlay,
    /// Effect executor.
    pub runtime: Runtime,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Backend shown in the title.
    pub api_label: String,
    /// Clickable rows from the last frame.
    pub row_hits: Vec<(Rect, ProfessorId)>,
    /// First visible row of the list.
    pub list_scroll: usize,
}

impl App {
    /// Create a new application instance.
    pub fn new(list: ListState, runtime: Runtime, api_label: impl Into<String>) -> Self {
        Self {
            list,
            search: SearchInput::new(),
            detail: DetailOverlay::new(),
            runtime,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            api_label: api_label.into(),
            row_hits: Vec::new(),
            list_scroll: 0,
        }
    }

    /// Apply an event to the list controller.
    pub fn dispatch(&mut self, event: Event) {
        self.runtime.dispatch(&mut self.list, event);
    }

    /// Initial load.
    pub fn start(&mut self) {
        tracing::info!("Starting with backend {}", self.api_label);
        self.dispatch(Event::LoadRequested);
    }

    /// Apply finished requests. Returns true when something changed.
    pub fn tick(&mut self) -> bool {
        let applied = self.runtime.pump(&mut self.list);
        if self.detail.is_open() && self.list.selected().is_none() {
            self.detail.close();
        }
        if applied > 0 && !self.list.is_loading() && !self.list.is_refreshing() {
            self.status = format!("{} professors", self.list.professors().len());
        }
        applied > 0
    }

    /// Trigger a scrape, unless one is already running.
    pub fn refresh(&mut self) {
        if self.list.is_refreshing() {
            self.status = "Scrape already running".to_string();
            return;
        }
        self.status = "Scraping...".to_string();
        self.dispatch(Event::RefreshRequested);
    }

    /// Submit the search buffer.
    pub fn submit_search(&mut self) {
        let Some(query) = self.search.submit() else {
            return;
        };
        self.dispatch(Event::SearchSubmitted(query.clone()));
        self.list_scroll = 0;
        self.status = format!(
            "{} match{} for '{}'",
            self.list.filtered_len(),
            if self.list.filtered_len() == 1 { "" } else { "es" },
            query
        );
    }

    /// Drop the active filter.
    pub fn clear_search(&mut self) {
        if self.list.last_query().is_none() {
            return;
        }
        self.search.clear();
        self.dispatch(Event::SearchCleared);
        self.list_scroll = 0;
        self.status = "Filter cleared".to_string();
    }

    /// Open the detail view for a professor.
    pub fn select(&mut self, id: ProfessorId) {
        self.dispatch(Event::Select(id));
        if self.list.selected().is_some() {
            self.detail.open(Instant::now());
        }
    }

    /// Open the detail view for the row under the cursor.
    pub fn open_highlighted(&mut self) {
        if let Some(id) = self.list.highlighted().map(|p| p.id) {
            self.select(id);
        }
    }

    /// Close the detail view.
    pub fn close_detail(&mut self) {
        self.dispatch(Event::Deselect);
        self.detail.close();
    }

    /// Handle a left click at a terminal cell.
    pub fn click(&mut self, column: u16, row: u16) {
        if self.list.selected().is_some() {
            match self.detail.classify_click(column, row) {
                OverlayClick::Backdrop | OverlayClick::Close => self.close_detail(),
                OverlayClick::Panel => {},
            }
            return;
        }

        let hit = self
            .row_hits
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|(_, id)| *id);
        if let Some(id) = hit {
            self.select(id);
        }
    }

    /// Copy the highlighted professor to the clipboard.
    pub fn copy_highlighted(&mut self) {
        let Some(professor) = self.list.highlighted() else {
            self.status = "No professor selected".to_string();
            return;
        };
        self.status = match clipboard::copy_professor(professor) {
            Ok(()) => format!("Copied {}!", professor.name),
            Err(e) => format!("Copy failed: {}", e),
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Adjust scroll to keep the cursor row visible.
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        let cursor = self.list.cursor();
        if cursor < self.list_scroll {
            self.list_scroll = cursor;
        }
        if cursor >= self.list_scroll + visible_rows {
            self.list_scroll = cursor + 1 - visible_rows;
        }
    }
}
