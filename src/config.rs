//! Runtime settings.
//!
//! Settings are resolved from the command line (with environment fallbacks
//! handled by clap) and validated once at startup.

use std::time::Duration;

use reqwest::Url;

use crate::error::{ProfdeckError, Result};
use crate::list::{ListConfig, DEFAULT_SCHOOL_ID};

/// Backend used when none is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";

/// Validated settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Backend base URL.
    pub api_url: Url,
    /// Institution scraped on refresh.
    pub school_id: String,
    /// Optional cap on scraped professors.
    pub scrape_limit: Option<u32>,
    /// Wait between a successful scrape and the reload.
    pub refresh_delay: Duration,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Validate raw values.
    pub fn new(
        api_url: &str,
        school_id: impl Into<String>,
        refresh_delay: Duration,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let url = Url::parse(api_url).map_err(|e| ProfdeckError::invalid_url(api_url, e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ProfdeckError::invalid_url(
                api_url,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        let school_id = school_id.into();
        Ok(Self {
            api_url: url,
            school_id: if school_id.trim().is_empty() {
                DEFAULT_SCHOOL_ID.to_string()
            } else {
                school_id
            },
            scrape_limit: None,
            refresh_delay,
            timeout,
        })
    }

    /// Set the scrape limit.
    pub fn with_scrape_limit(mut self, limit: Option<u32>) -> Self {
        self.scrape_limit = limit;
        self
    }

    /// List controller configuration derived from these settings.
    pub fn list_config(&self) -> ListConfig {
        ListConfig {
            school_id: self.school_id.clone(),
            scrape_limit: self.scrape_limit,
            refresh_delay: self.refresh_delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::DEFAULT_REFRESH_DELAY;

    #[test]
    fn rejects_non_http_urls() {
        assert!(Settings::new("ftp://host", "1", DEFAULT_REFRESH_DELAY, None).is_err());
        assert!(Settings::new("not a url", "1", DEFAULT_REFRESH_DELAY, None).is_err());
    }

    #[test]
    fn blank_school_falls_back_to_default() {
        let settings = Settings::new(DEFAULT_API_URL, "  ", DEFAULT_REFRESH_DELAY, None).unwrap();
        assert_eq!(settings.school_id, DEFAULT_SCHOOL_ID);
        assert_eq!(settings.list_config().school_id, DEFAULT_SCHOOL_ID);
    }

    #[test]
    fn list_config_carries_limit_and_delay() {
        let settings = Settings::new("https://api.example.edu", "99", Duration::from_millis(10), None)
            .unwrap()
            .with_scrape_limit(Some(3));
        let config = settings.list_config();
        assert_eq!(config.school_id, "99");
        assert_eq!(config.scrape_limit, Some(3));
        assert_eq!(config.refresh_delay, Duration::from_millis(10));
    }
}
