//! Detail overlay feature - full view of the selected professor.
//!
//! The overlay content is a pure [`DetailView`]. [`DetailOverlay`] keeps the
//! bits only the terminal needs: the entry transition clock and the panel
//! rectangle from the last frame, used to tell backdrop clicks from panel
//! clicks.

pub mod ui;

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use crate::data::{Professor, ProfessorId};
use crate::list::view::rating_line;

/// Length of the entry transition.
pub const TRANSITION: Duration = Duration::from_millis(300);

/// Close glyph drawn right-aligned in the panel's top border.
pub const CLOSE_GLYPH: &str = " ✕ ";

/// Content of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Professor id.
    pub id: ProfessorId,
    /// Name, used as the heading.
    pub name: String,
    /// Class.
    pub class_name: String,
    /// Department.
    pub department: String,
    /// Average grade, `N/A` when unknown.
    pub avg_grade: String,
    /// Rating line for rated professors.
    pub rating: Option<String>,
    /// Rating-site identifier.
    pub ratemyprof_id: Option<String>,
}

impl DetailView {
    /// Build the detail view for a professor.
    pub fn new(professor: &Professor) -> Self {
        Self {
            id: professor.id,
            name: professor.name.clone(),
            class_name: professor.class_name.clone(),
            department: professor.department.clone(),
            avg_grade: professor
                .avg_grade
                .clone()
                .filter(|g| !g.trim().is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            rating: rating_line(professor),
            ratemyprof_id: professor.ratemyprof_id.as_ref().map(|id| id.to_string()),
        }
    }
}

/// Outcome of a click while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// Click landed on the backdrop; the overlay should close.
    Backdrop,
    /// Click landed on the close glyph; the overlay should close.
    Close,
    /// Click landed inside the panel and is consumed.
    Panel,
}

/// Terminal-side state of the detail overlay.
#[derive(Debug, Default)]
pub struct DetailOverlay {
    opened_at: Option<Instant>,
    panel: Option<Rect>,
}

impl DetailOverlay {
    /// Create a closed overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the entry transition.
    pub fn open(&mut self, now: Instant) {
        self.opened_at = Some(now);
        self.panel = None;
    }

    /// Forget transition and geometry.
    pub fn close(&mut self) {
        self.opened_at = None;
        self.panel = None;
    }

    /// Whether the overlay has been opened.
    pub fn is_open(&self) -> bool {
        self.opened_at.is_some()
    }

    /// Transition progress in `[0, 1]`, eased out.
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(opened_at) = self.opened_at else {
            return 1.0;
        };
        let t = now.saturating_duration_since(opened_at).as_secs_f64() / TRANSITION.as_secs_f64();
        let t = t.clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }

    /// Whether the entry transition is still running.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    /// Record where the panel was drawn.
    pub fn set_panel(&mut self, panel: Rect) {
        self.panel = Some(panel);
    }

    /// Classify a click at terminal cell `(column, row)`.
    ///
    /// Before the first frame there is no panel, so every click counts as
    /// backdrop.
    pub fn classify_click(&self, column: u16, row: u16) -> OverlayClick {
        let position = Position::new(column, row);
        match self.panel {
            Some(panel) if close_rect(panel).contains(position) => OverlayClick::Close,
            Some(panel) if panel.contains(position) => OverlayClick::Panel,
            _ => OverlayClick::Backdrop,
        }
    }
}

/// Cells covered by [`CLOSE_GLYPH`], inside the top-right border corner.
pub fn close_rect(panel: Rect) -> Rect {
    let width = CLOSE_GLYPH.chars().count() as u16;
    let x = panel.right().saturating_sub(width + 1).max(panel.x);
    Rect {
        x,
        y: panel.y,
        width: width.min(panel.width),
        height: panel.height.min(1),
    }
}

/// Panel rectangle for a given transition progress.
///
/// At rest the panel is centered; during the transition it slides up from
/// half its height below the resting position.
pub fn panel_rect(area: Rect, progress: f64) -> Rect {
    let rest = centered_rect(60, 50, area);
    let offset = ((1.0 - progress.clamp(0.0, 1.0)) * f64::from(rest.height) / 2.0).round() as u16;
    let max_y = area.bottom().saturating_sub(rest.height);
    Rect {
        y: (rest.y + offset).min(max_y),
        ..rest
    }
}

/// Helper function to create a centered rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let width = (u32::from(r.width) * u32::from(percent_x) / 100) as u16;
    let height = (u32::from(r.height) * u32::from(percent_y) / 100) as u16;
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RateMyProfId;

    #[test]
    fn detail_view_fills_placeholders() {
        let mut professor = Professor::new(2, "Dr. Bob Johnson", "Mathematics", "MATH201", "A-");
        professor.avg_grade = None;
        professor.ratemyprof_id = Some(RateMyProfId::Numeric(77));
        let view = DetailView::new(&professor);
        assert_eq!(view.avg_grade, "N/A");
        assert_eq!(view.ratemyprof_id.as_deref(), Some("77"));
        assert_eq!(view.rating, None);
    }

    #[test]
    fn clicks_inside_panel_do_not_close() {
        let mut overlay = DetailOverlay::new();
        overlay.open(Instant::now());
        overlay.set_panel(Rect::new(10, 5, 20, 10));

        assert_eq!(overlay.classify_click(10, 5), OverlayClick::Panel);
        assert_eq!(overlay.classify_click(29, 14), OverlayClick::Panel);
        assert_eq!(overlay.classify_click(30, 14), OverlayClick::Backdrop);
        assert_eq!(overlay.classify_click(0, 0), OverlayClick::Backdrop);
    }

    #[test]
    fn close_glyph_sits_in_top_right_border() {
        let mut overlay = DetailOverlay::new();
        overlay.open(Instant::now());
        let panel = Rect::new(10, 2, 20, 10);
        overlay.set_panel(panel);

        assert_eq!(close_rect(panel), Rect::new(26, 2, 3, 1));
        assert_eq!(overlay.classify_click(27, 2), OverlayClick::Close);
        assert_eq!(overlay.classify_click(29, 2), OverlayClick::Panel);
        assert_eq!(overlay.classify_click(27, 3), OverlayClick::Panel);
    }

    #[test]
    fn transition_eases_to_rest() {
        let start = Instant::now();
        let mut overlay = DetailOverlay::new();
        overlay.open(start);

        assert_eq!(overlay.progress(start), 0.0);
        assert!(overlay.is_animating(start + Duration::from_millis(100)));
        assert_eq!(overlay.progress(start + TRANSITION), 1.0);
        assert!(!overlay.is_animating(start + Duration::from_secs(2)));

        overlay.close();
        assert!(!overlay.is_open());
    }

    #[test]
    fn panel_slides_into_center() {
        let area = Rect::new(0, 0, 100, 40);
        let rest = panel_rect(area, 1.0);
        assert_eq!(rest, centered_rect(60, 50, area));

        let start = panel_rect(area, 0.0);
        assert_eq!(start.x, rest.x);
        assert_eq!(start.y, rest.y + rest.height / 2);
        assert!(start.bottom() <= area.bottom());
    }
}
