//! Profdeck - A terminal client for browsing professor ratings.
//!
//! Profdeck fetches a professor list from a ratings backend, lets you search
//! it, opens full details for one professor, and asks the backend to re-scrape
//! the rating site.
//!
//! # Features
//!
//! - Case-insensitive search over class, name and department
//! - One-key backend scrape with automatic reload
//! - Detail overlay with keyboard and mouse dismissal
//! - Headless `list`/`search`/`show`/`scrape`/`stats` subcommands
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use profdeck::list::{Event, ListState};
//! use profdeck::data::seed_professors;
//!
//! let mut state = ListState::default();
//! state.apply(Event::LoadSucceeded(seed_professors()));
//! state.apply(Event::SearchSubmitted("math".to_string()));
//! assert_eq!(state.filtered_len(), 1);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod api;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod data;
pub mod detail;
pub mod error;
pub mod list;
pub mod runtime;
pub mod search;
pub mod ui;

pub use error::{ProfdeckError, Result};
