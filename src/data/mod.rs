//! Data types exchanged with the professor backend.
//!
//! This module holds the professor record, the scrape request/response
//! contract and the small seed list used for demos and tests.

mod professor;
mod scrape;
mod seed;

pub use professor::{Professor, ProfessorId, RateMyProfId};
pub use scrape::{ProfessorStats, ScrapeOutcome, ScrapeRequest};
pub use seed::seed_professors;
