//! Projection of the list state into a render-ready view-model.
//!
//! Nothing here touches the terminal; the `ui` module only draws what
//! [`view`] returns.

use crate::data::{Professor, ProfessorId};
use crate::detail::DetailView;
use crate::search::SearchInput;

use super::{ListState, Notice};

/// Placeholder row while a fetch is in flight.
pub const LOADING_TEXT: &str = "Loading professors...";

/// Row shown when nothing matches.
pub const EMPTY_TEXT: &str = "No professors found.";

/// Refresh button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshButton {
    /// Button caption.
    pub label: &'static str,
    /// Disabled while a scrape is in flight.
    pub enabled: bool,
}

/// Summary row for one professor.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorRow {
    /// Row key.
    pub id: ProfessorId,
    /// Professor name.
    pub name: String,
    /// Class tag.
    pub class_name: String,
    /// Department.
    pub department: String,
    /// Rating line, present only for rated professors.
    pub rating: Option<String>,
    /// Row under the cursor.
    pub highlighted: bool,
}

impl ProfessorRow {
    /// Build the summary row for a professor.
    pub fn new(professor: &Professor, highlighted: bool) -> Self {
        Self {
            id: professor.id,
            name: professor.name.clone(),
            class_name: professor.class_name.clone(),
            department: professor.department.clone(),
            rating: rating_line(professor),
            highlighted,
        }
    }
}

/// One entry of the list area.
#[derive(Debug, Clone, PartialEq)]
pub enum RowView {
    /// Fetch in flight.
    Placeholder(&'static str),
    /// Nothing to show.
    Empty(&'static str),
    /// A professor.
    Professor(ProfessorRow),
}

/// Everything the screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    /// Text in the search box.
    pub search_text: String,
    /// Search box focused.
    pub search_active: bool,
    /// Query of the active filter.
    pub filter: Option<String>,
    /// Refresh button.
    pub refresh: RefreshButton,
    /// Notice under the button.
    pub notice: Option<Notice>,
    /// List rows.
    pub rows: Vec<RowView>,
    /// Detail overlay content.
    pub detail: Option<DetailView>,
}

/// Project the state into a view-model.
pub fn view(state: &ListState, search: &SearchInput) -> ListView {
    let rows = if state.is_loading() {
        vec![RowView::Placeholder(LOADING_TEXT)]
    } else if state.filtered_len() == 0 {
        vec![RowView::Empty(EMPTY_TEXT)]
    } else {
        state
            .filtered()
            .enumerate()
            .map(|(idx, p)| RowView::Professor(ProfessorRow::new(p, idx == state.cursor())))
            .collect()
    };

    let refresh = if state.is_refreshing() {
        RefreshButton {
            label: "Scraping...",
            enabled: false,
        }
    } else {
        RefreshButton {
            label: "Refresh from RateMyProf",
            enabled: true,
        }
    };

    ListView {
        search_text: search.buffer().to_string(),
        search_active: search.is_active(),
        filter: state.last_query().map(str::to_string),
        refresh,
        notice: state.message().cloned(),
        rows,
        detail: state.selected().map(DetailView::new),
    }
}

/// Rating line for a rated professor, e.g. `⭐ RateMyProf: 4.6/5.0 (12 ratings)`.
///
/// Unrated professors (no rating, or a rating of 0) get `None`. The count is
/// only shown when positive.
pub fn rating_line(professor: &Professor) -> Option<String> {
    let rating = professor.positive_rating()?;
    let mut line = format!("⭐ RateMyProf: {}/5.0", one_decimal(rating));
    if let Some(count) = professor.num_ratings.filter(|n| *n > 0) {
        line.push_str(&format!(" ({} ratings)", count));
    }
    Some(line)
}

/// Format with one decimal, rounding the exact stored value half-up.
///
/// `{:.1}` already rounds the exact binary value; only true ties such as
/// 4.25 need help, since the formatter sends those to even.
fn one_decimal(value: f64) -> String {
    let scaled = (value * 10.0).floor();
    let is_tie = value.mul_add(10.0, -(scaled + 0.5)) == 0.0;
    if is_tie {
        format!("{:.1}", (scaled + 1.0) / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_professors;
    use crate::list::Event;

    fn alice() -> Professor {
        Professor::new(1, "Dr. Alice Smith", "Computer Science", "CIS101", "B+")
    }

    fn professor_rows(view: &ListView) -> Vec<&ProfessorRow> {
        view.rows
            .iter()
            .filter_map(|row| match row {
                RowView::Professor(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn unrated_row_has_no_rating_line() {
        let mut state = ListState::default();
        state.apply(Event::LoadSucceeded(vec![alice()]));
        let view = view(&state, &SearchInput::new());

        let rows = professor_rows(&view);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Dr. Alice Smith");
        assert_eq!(rows[0].class_name, "CIS101");
        assert_eq!(rows[0].department, "Computer Science");
        assert_eq!(rows[0].rating, None);
    }

    #[test]
    fn rated_row_shows_rounded_rating_and_count() {
        let rated = alice().with_rating(4.567, Some(12));
        assert_eq!(
            rating_line(&rated).as_deref(),
            Some("⭐ RateMyProf: 4.6/5.0 (12 ratings)")
        );

        let no_count = alice().with_rating(3.0, None);
        assert_eq!(rating_line(&no_count).as_deref(), Some("⭐ RateMyProf: 3.0/5.0"));

        let zero_count = alice().with_rating(4.25, Some(0));
        assert_eq!(rating_line(&zero_count).as_deref(), Some("⭐ RateMyProf: 4.3/5.0"));

        assert_eq!(rating_line(&alice().with_rating(0.0, Some(5))), None);
    }

    #[test]
    fn rating_rounds_stored_value_not_scaled_value() {
        // 4.35 and 1.15 are stored slightly below the written decimal.
        let below = alice().with_rating(4.35, None);
        assert_eq!(rating_line(&below).as_deref(), Some("⭐ RateMyProf: 4.3/5.0"));

        let below = alice().with_rating(1.15, None);
        assert_eq!(rating_line(&below).as_deref(), Some("⭐ RateMyProf: 1.1/5.0"));

        // Exact ties round up.
        assert_eq!(one_decimal(0.25), "0.3");
        assert_eq!(one_decimal(4.75), "4.8");
        assert_eq!(one_decimal(4.96), "5.0");
    }

    #[test]
    fn loading_shows_single_placeholder() {
        let mut state = ListState::default();
        state.apply(Event::LoadSucceeded(seed_professors()));
        state.apply(Event::LoadRequested);
        let view = view(&state, &SearchInput::new());
        assert_eq!(view.rows, vec![RowView::Placeholder(LOADING_TEXT)]);
    }

    #[test]
    fn empty_result_shows_single_no_results_row() {
        let mut state = ListState::default();
        state.apply(Event::LoadSucceeded(seed_professors()));
        state.apply(Event::SearchSubmitted("nobody".to_string()));
        let view = view(&state, &SearchInput::new());
        assert_eq!(view.rows, vec![RowView::Empty(EMPTY_TEXT)]);
        assert_eq!(view.filter.as_deref(), Some("nobody"));
    }

    #[test]
    fn rows_follow_filtered_order_with_cursor() {
        let mut state = ListState::default();
        state.apply(Event::LoadSucceeded(seed_professors()));
        state.apply(Event::CursorDown);
        let view = view(&state, &SearchInput::new());
        let rows = professor_rows(&view);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(
            rows.iter().map(|r| r.highlighted).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[test]
    fn refresh_button_disabled_while_scraping() {
        let mut state = ListState::default();
        assert!(view(&state, &SearchInput::new()).refresh.enabled);

        state.apply(Event::RefreshRequested);
        let scraping = view(&state, &SearchInput::new());
        assert_eq!(
            scraping.refresh,
            RefreshButton {
                label: "Scraping...",
                enabled: false
            }
        );
    }

    #[test]
    fn detail_present_only_with_selection() {
        let mut state = ListState::default();
        state.apply(Event::LoadSucceeded(seed_professors()));
        assert_eq!(view(&state, &SearchInput::new()).detail, None);

        state.apply(Event::Select(3));
        let detail = view(&state, &SearchInput::new()).detail.unwrap();
        assert_eq!(detail.name, "Dr. Charlie Brown");
        assert_eq!(detail.avg_grade, "B");
    }
}
