//! Blocking HTTP implementation of [`ProfessorApi`].

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::ProfessorApi;
use crate::data::{Professor, ProfessorId, ProfessorStats, ScrapeOutcome, ScrapeRequest};
use crate::error::{ProfdeckError, Result};

const PROFESSORS_PATH: &str = "/api/professors";
const SCRAPE_PATH: &str = "/api/scrape-professors";
const STATS_PATH: &str = "/api/professors/stats";

/// HTTP client for the professor backend.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    /// Create a client for `base_url`.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("profdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ProfdeckError::status(response.status().as_u16(), url));
        }
        decode_body(response, &url)
    }
}

fn decode_body<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
    let body = response.text()?;
    serde_json::from_str(&body).map_err(|e| ProfdeckError::decode(url, e))
}

impl ProfessorApi for HttpApi {
    fn list_professors(&self) -> Result<Vec<Professor>> {
        self.get_json(PROFESSORS_PATH)
    }

    fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeOutcome> {
        let url = self.endpoint(SCRAPE_PATH);
        tracing::debug!("POST {} school_id={}", url, request.school_id);
        let response = self.client.post(&url).json(request).send()?;
        let status = response.status();

        // Failures come back as 4xx/5xx with a regular outcome body.
        match decode_body::<ScrapeOutcome>(response, &url) {
            Ok(outcome) => Ok(outcome),
            Err(_) if !status.is_success() => Err(ProfdeckError::status(status.as_u16(), url)),
            Err(e) => Err(e),
        }
    }

    fn professor(&self, id: ProfessorId) -> Result<Professor> {
        self.get_json(&format!("{}/{}", PROFESSORS_PATH, id))
    }

    fn stats(&self) -> Result<ProfessorStats> {
        self.get_json(STATS_PATH)
    }
}
