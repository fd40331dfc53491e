//! Backend API access.
//!
//! The controller only talks to the backend through [`ProfessorApi`], so it
//! can be driven by the real HTTP client or by an in-memory fake.

mod client;

pub use client::HttpApi;

use crate::data::{Professor, ProfessorId, ProfessorStats, ScrapeOutcome, ScrapeRequest};
use crate::error::Result;

/// Operations offered by the professor backend.
pub trait ProfessorApi: Send + Sync {
    /// `GET /api/professors`.
    fn list_professors(&self) -> Result<Vec<Professor>>;

    /// `POST /api/scrape-professors`.
    ///
    /// A decoded body with `success == false` is an `Ok` outcome; only
    /// transport and decoding problems are errors.
    fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeOutcome>;

    /// `GET /api/professors/{id}`.
    fn professor(&self, id: ProfessorId) -> Result<Professor>;

    /// `GET /api/professors/stats`.
    fn stats(&self) -> Result<ProfessorStats>;
}
