//! List controller feature - the professor list state machine and its
//! view-model projection.
//!
//! [`ListState`] owns the full professor snapshot, the filtered subset, the
//! selection, the loading/refreshing flags and the user-facing notice. It is
//! only mutated through [`ListState::apply`]; any I/O it needs is returned as
//! [`Effect`]s for the runtime to execute.

mod state;
pub mod view;

pub use state::{
    Effect, Event, ListConfig, ListState, Notice, NoticeKind, DEFAULT_REFRESH_DELAY,
    DEFAULT_SCHOOL_ID, LOAD_FAILED_TEXT, SCRAPE_ERROR_TEXT,
};
pub use view::{view, ListView, ProfessorRow, RefreshButton, RowView};
