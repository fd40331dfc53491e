//! Scrape and stats payloads.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/scrape-professors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    /// Institution to scrape.
    pub school_id: String,
    /// Backend test mode; always false from this client.
    pub testing: bool,
    /// Optional cap on scraped professors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ScrapeRequest {
    /// Create a production scrape request for a school.
    pub fn new(school_id: impl Into<String>) -> Self {
        Self {
            school_id: school_id.into(),
            testing: false,
            limit: None,
        }
    }

    /// Limit the number of scraped professors.
    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }
}

/// Response of `POST /api/scrape-professors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeOutcome {
    /// Whether the backend reports success.
    pub success: bool,
    /// Number of scraped professors.
    #[serde(default)]
    pub count: Option<u64>,
    /// Backend explanation, mostly set on failure.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /api/professors/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorStats {
    /// Professors stored.
    pub total: u64,
    /// Professors carrying an overall rating.
    pub with_ratings: u64,
    /// Professors linked to the rating site.
    pub from_rate_my_prof: u64,
}
