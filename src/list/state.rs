//! List controller state and transitions.

use std::time::Duration;

use crate::data::{Professor, ProfessorId, ScrapeRequest};

/// Institution scraped when none is configured (Foothill College).
pub const DEFAULT_SCHOOL_ID: &str = "1581";

/// Wait between a successful scrape and the follow-up load.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_secs(1);

/// Notice shown when the professor list cannot be fetched.
pub const LOAD_FAILED_TEXT: &str = "Failed to fetch professors";

/// Notice shown when the scrape request itself fails.
pub const SCRAPE_ERROR_TEXT: &str = "Error triggering RateMyProf scrape";

/// Kind of user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
}

/// Short message shown above the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Success or error.
    pub kind: NoticeKind,
    /// Text shown to the user.
    pub text: String,
}

impl Notice {
    /// Create a success notice.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    /// Create an error notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// Check if this is an error notice.
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Inputs to the list state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Start fetching the professor list.
    LoadRequested,
    /// The list fetch returned a snapshot.
    LoadSucceeded(Vec<Professor>),
    /// The list fetch failed; carries the diagnostic reason.
    LoadFailed(String),
    /// Ask the backend to scrape the rating site.
    RefreshRequested,
    /// The backend reported a successful scrape.
    RefreshSucceeded {
        /// Number of scraped professors.
        count: Option<u64>,
    },
    /// The backend reported a failed scrape.
    RefreshRejected {
        /// Backend explanation.
        message: Option<String>,
    },
    /// The scrape request could not be completed; carries the diagnostic reason.
    RefreshFailed(String),
    /// A non-blank query was submitted.
    SearchSubmitted(String),
    /// The active filter was dropped.
    SearchCleared,
    /// Open the detail view for a professor.
    Select(ProfessorId),
    /// Close the detail view.
    Deselect,
    /// Move the list cursor up.
    CursorUp,
    /// Move the list cursor down.
    CursorDown,
    /// Move the list cursor to the first row.
    CursorFirst,
    /// Move the list cursor to the last row.
    CursorLast,
    /// Hide the current notice.
    MessageDismissed,
}

/// I/O requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the professor list; answer with `LoadSucceeded`/`LoadFailed`.
    FetchProfessors,
    /// Trigger a scrape; answer with one of the `Refresh*` completions.
    Scrape(ScrapeRequest),
    /// Deliver `LoadRequested` after the delay.
    ScheduleLoad(Duration),
}

/// Static parameters of the list controller.
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Institution to scrape on refresh.
    pub school_id: String,
    /// Optional cap on scraped professors.
    pub scrape_limit: Option<u32>,
    /// Wait before reloading after a successful scrape.
    pub refresh_delay: Duration,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            school_id: DEFAULT_SCHOOL_ID.to_string(),
            scrape_limit: None,
            refresh_delay: DEFAULT_REFRESH_DELAY,
        }
    }
}

/// List controller state.
///
/// `filtered` holds indices into `professors`, so it is a subset of the
/// current snapshot by construction. After each successful load the last
/// submitted query is re-applied to the new snapshot.
#[derive(Debug)]
pub struct ListState {
    config: ListConfig,
    professors: Vec<Professor>,
    filtered: Vec<usize>,
    selected: Option<Professor>,
    loading: bool,
    refreshing: bool,
    message: Option<Notice>,
    last_query: Option<String>,
    cursor: usize,
}

impl ListState {
    /// Create an empty state.
    pub fn new(config: ListConfig) -> Self {
        Self {
            config,
            professors: Vec::new(),
            filtered: Vec::new(),
            selected: None,
            loading: false,
            refreshing: false,
            message: None,
            last_query: None,
            cursor: 0,
        }
    }

    /// Apply one event and return the effects it requests.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::LoadRequested => {
                tracing::info!("Loading professors");
                self.loading = true;
                return vec![Effect::FetchProfessors];
            },
            Event::LoadSucceeded(professors) => {
                tracing::info!("Loaded {} professors", professors.len());
                self.professors = professors;
                self.refilter();
                self.resolve_selection();
                self.loading = false;
            },
            Event::LoadFailed(reason) => {
                tracing::error!("Error fetching professors: {}", reason);
                self.message = Some(Notice::error(LOAD_FAILED_TEXT));
                self.loading = false;
            },
            Event::RefreshRequested => {
                if self.refreshing {
                    tracing::debug!("Refresh already in flight, ignoring");
                    return Vec::new();
                }
                tracing::info!("Requesting scrape for school {}", self.config.school_id);
                self.refreshing = true;
                self.message = None;
                return vec![Effect::Scrape(self.scrape_request())];
            },
            Event::RefreshSucceeded { count } => {
                let count = count.unwrap_or(0);
                tracing::info!("Scrape finished with {} professors", count);
                self.message = Some(Notice::success(format!(
                    "✓ Successfully scraped {} professors!",
                    count
                )));
                self.refreshing = false;
                return vec![Effect::ScheduleLoad(self.config.refresh_delay)];
            },
            Event::RefreshRejected { message } => {
                let message = message.unwrap_or_else(|| "unknown error".to_string());
                tracing::warn!("Scrape rejected by backend: {}", message);
                self.message = Some(Notice::error(format!("✗ Scrape failed: {}", message)));
                self.refreshing = false;
            },
            Event::RefreshFailed(reason) => {
                tracing::error!("Scrape error: {}", reason);
                self.message = Some(Notice::error(SCRAPE_ERROR_TEXT));
                self.refreshing = false;
            },
            Event::SearchSubmitted(query) => {
                self.last_query = Some(query);
                self.refilter();
                self.cursor = 0;
            },
            Event::SearchCleared => {
                self.last_query = None;
                self.refilter();
                self.cursor = 0;
            },
            Event::Select(id) => {
                if let Some(professor) = self.professors.iter().find(|p| p.id == id) {
                    self.selected = Some(professor.clone());
                }
            },
            Event::Deselect => self.selected = None,
            Event::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Event::CursorDown => {
                if self.cursor + 1 < self.filtered.len() {
                    self.cursor += 1;
                }
            },
            Event::CursorFirst => self.cursor = 0,
            Event::CursorLast => self.cursor = self.filtered.len().saturating_sub(1),
            Event::MessageDismissed => self.message = None,
        }
        Vec::new()
    }

    fn scrape_request(&self) -> ScrapeRequest {
        ScrapeRequest::new(self.config.school_id.clone()).with_limit(self.config.scrape_limit)
    }

    fn refilter(&mut self) {
        self.filtered = match &self.last_query {
            Some(query) => {
                let needle = query.to_lowercase();
                self.professors
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.matches_folded(&needle))
                    .map(|(idx, _)| idx)
                    .collect()
            },
            None => (0..self.professors.len()).collect(),
        };
        self.cursor = self.cursor.min(self.filtered.len().saturating_sub(1));
    }

    fn resolve_selection(&mut self) {
        if let Some(id) = self.selected.as_ref().map(|p| p.id) {
            self.selected = self.professors.iter().find(|p| p.id == id).cloned();
        }
    }

    /// Full professor snapshot.
    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    /// Professors matching the active filter, in snapshot order.
    pub fn filtered(&self) -> impl Iterator<Item = &Professor> + '_ {
        self.filtered.iter().map(|&idx| &self.professors[idx])
    }

    /// Number of professors matching the active filter.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Professor shown in the detail view.
    pub fn selected(&self) -> Option<&Professor> {
        self.selected.as_ref()
    }

    /// Whether a list fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a scrape is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Current notice.
    pub fn message(&self) -> Option<&Notice> {
        self.message.as_ref()
    }

    /// Last submitted query, if a filter is active.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Cursor position within the filtered rows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Professor under the cursor.
    pub fn highlighted(&self) -> Option<&Professor> {
        self.filtered
            .get(self.cursor)
            .map(|&idx| &self.professors[idx])
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(ListConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_professors;

    fn loaded() -> ListState {
        let mut state = ListState::default();
        state.apply(Event::LoadRequested);
        state.apply(Event::LoadSucceeded(seed_professors()));
        state
    }

    fn filtered_names(state: &ListState) -> Vec<&str> {
        state.filtered().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn load_replaces_professors_and_filtered() {
        let mut state = ListState::default();
        assert_eq!(state.apply(Event::LoadRequested), vec![Effect::FetchProfessors]);
        assert!(state.is_loading());

        assert!(state.apply(Event::LoadSucceeded(seed_professors())).is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.professors(), seed_professors().as_slice());
        assert_eq!(state.filtered().cloned().collect::<Vec<_>>(), seed_professors());
    }

    #[test]
    fn failed_load_keeps_data_and_reports_error() {
        let mut state = loaded();
        state.apply(Event::SearchSubmitted("math".to_string()));
        state.apply(Event::LoadRequested);
        state.apply(Event::LoadFailed("connection refused".to_string()));

        assert!(!state.is_loading());
        assert_eq!(state.professors().len(), 3);
        assert_eq!(filtered_names(&state), vec!["Dr. Bob Johnson"]);
        let message = state.message().unwrap();
        assert!(message.is_error());
        assert_eq!(message.text, LOAD_FAILED_TEXT);
    }

    #[test]
    fn search_matches_department_case_insensitively() {
        let mut state = loaded();
        state.apply(Event::SearchSubmitted("math".to_string()));
        assert_eq!(filtered_names(&state), vec!["Dr. Bob Johnson"]);
    }

    #[test]
    fn search_always_filters_the_full_set() {
        let mut state = loaded();
        state.apply(Event::SearchSubmitted("physics".to_string()));
        assert_eq!(filtered_names(&state), vec!["Dr. Charlie Brown"]);

        state.apply(Event::SearchSubmitted("dr.".to_string()));
        assert_eq!(state.filtered_len(), 3);
        assert_eq!(state.professors().len(), 3);
    }

    #[test]
    fn search_result_equals_predicate_for_many_queries() {
        let mut state = loaded();
        for query in ["", "a", "CIS", "cis101", "Smith", "o", "zzz", "301", "SCIENCE", "é"] {
            state.apply(Event::SearchSubmitted(query.to_string()));
            let expected: Vec<_> = seed_professors()
                .into_iter()
                .filter(|p| {
                    let q = query.to_lowercase();
                    p.name.to_lowercase().contains(&q)
                        || p.class_name.to_lowercase().contains(&q)
                        || p.department.to_lowercase().contains(&q)
                })
                .collect();
            assert_eq!(state.filtered().cloned().collect::<Vec<_>>(), expected, "query {:?}", query);
        }
    }

    #[test]
    fn load_reapplies_last_query() {
        let mut state = loaded();
        state.apply(Event::SearchSubmitted("math".to_string()));

        let mut next = seed_professors();
        next.push(Professor::new(4, "Dr. Dana White", "Mathematics", "MATH310", "A"));
        state.apply(Event::LoadSucceeded(next));

        assert_eq!(filtered_names(&state), vec!["Dr. Bob Johnson", "Dr. Dana White"]);

        state.apply(Event::SearchCleared);
        assert_eq!(state.filtered_len(), 4);
        assert_eq!(state.last_query(), None);
    }

    #[test]
    fn refresh_success_schedules_reload() {
        let mut state = loaded();
        let effects = state.apply(Event::RefreshRequested);
        assert_eq!(
            effects,
            vec![Effect::Scrape(ScrapeRequest {
                school_id: "1581".to_string(),
                testing: false,
                limit: None,
            })]
        );
        assert!(state.is_refreshing());
        assert_eq!(state.message(), None);

        let effects = state.apply(Event::RefreshSucceeded { count: Some(42) });
        assert_eq!(effects, vec![Effect::ScheduleLoad(DEFAULT_REFRESH_DELAY)]);
        assert!(!state.is_refreshing());
        assert_eq!(
            state.message(),
            Some(&Notice::success("✓ Successfully scraped 42 professors!"))
        );
    }

    #[test]
    fn refresh_always_ends_not_refreshing() {
        let outcomes = [
            Event::RefreshSucceeded { count: None },
            Event::RefreshRejected { message: None },
            Event::RefreshFailed("reset by peer".to_string()),
        ];
        for outcome in outcomes {
            let mut state = loaded();
            state.apply(Event::RefreshRequested);
            state.apply(outcome);
            assert!(!state.is_refreshing());
            assert!(state.message().is_some());
        }
    }

    #[test]
    fn refresh_rejection_surfaces_backend_message() {
        let mut state = loaded();
        state.apply(Event::RefreshRequested);
        let effects = state.apply(Event::RefreshRejected {
            message: Some("site unreachable".to_string()),
        });
        assert!(effects.is_empty());
        assert_eq!(
            state.message(),
            Some(&Notice::error("✗ Scrape failed: site unreachable"))
        );
        assert_eq!(state.professors(), seed_professors().as_slice());
    }

    #[test]
    fn refresh_exception_uses_generic_text() {
        let mut state = loaded();
        state.apply(Event::RefreshRequested);
        state.apply(Event::RefreshFailed("timed out".to_string()));
        assert_eq!(state.message(), Some(&Notice::error(SCRAPE_ERROR_TEXT)));
    }

    #[test]
    fn refresh_is_ignored_while_in_flight() {
        let mut state = loaded();
        state.apply(Event::RefreshRequested);
        assert!(state.apply(Event::RefreshRequested).is_empty());
        assert!(state.is_refreshing());
    }

    #[test]
    fn refresh_clears_previous_message() {
        let mut state = ListState::default();
        state.apply(Event::LoadFailed("boom".to_string()));
        assert!(state.message().is_some());
        state.apply(Event::RefreshRequested);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn refresh_request_carries_configured_school_and_limit() {
        let mut state = ListState::new(ListConfig {
            school_id: "42".to_string(),
            scrape_limit: Some(10),
            refresh_delay: Duration::from_millis(5),
        });
        let effects = state.apply(Event::RefreshRequested);
        assert_eq!(
            effects,
            vec![Effect::Scrape(ScrapeRequest::new("42").with_limit(Some(10)))]
        );
        let effects = state.apply(Event::RefreshSucceeded { count: Some(1) });
        assert_eq!(effects, vec![Effect::ScheduleLoad(Duration::from_millis(5))]);
    }

    #[test]
    fn select_and_deselect() {
        let mut state = loaded();
        state.apply(Event::Select(2));
        assert_eq!(state.selected().map(|p| p.name.as_str()), Some("Dr. Bob Johnson"));

        state.apply(Event::Select(99));
        assert_eq!(state.selected().map(|p| p.id), Some(2));

        state.apply(Event::Deselect);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn selection_follows_reload() {
        let mut state = loaded();
        state.apply(Event::Select(1));

        let updated = vec![
            Professor::new(1, "Dr. Alice Smith", "Computer Science", "CIS101", "A")
                .with_rating(4.2, Some(8)),
        ];
        state.apply(Event::LoadSucceeded(updated));
        assert_eq!(state.selected().and_then(|p| p.overall_rating), Some(4.2));

        state.apply(Event::LoadSucceeded(vec![Professor::new(5, "N", "D", "C", "B")]));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn cursor_stays_within_filtered_rows() {
        let mut state = loaded();
        state.apply(Event::CursorUp);
        assert_eq!(state.cursor(), 0);
        state.apply(Event::CursorLast);
        assert_eq!(state.cursor(), 2);
        state.apply(Event::CursorDown);
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.highlighted().map(|p| p.id), Some(3));

        state.apply(Event::SearchSubmitted("zzz".to_string()));
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.highlighted(), None);
        state.apply(Event::CursorDown);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn dismissing_notice_keeps_data() {
        let mut state = loaded();
        state.apply(Event::LoadFailed("timeout".to_string()));
        state.apply(Event::MessageDismissed);
        assert_eq!(state.message(), None);
        assert_eq!(state.professors().len(), 3);
    }
}
