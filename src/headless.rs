//! Headless subcommands.
//!
//! These drive the same list controller as the terminal UI, with an inline
//! scheduler so every request completes before the command returns.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use profdeck::api::ProfessorApi;
use profdeck::config::Settings;
use profdeck::data::ProfessorId;
use profdeck::detail::DetailView;
use profdeck::list::{Event, ListState, ProfessorRow};
use profdeck::runtime::{InlineScheduler, Runtime};

struct Session {
    state: ListState,
    runtime: Runtime,
}

impl Session {
    fn new(api: Arc<dyn ProfessorApi>, settings: &Settings) -> Self {
        Self {
            state: ListState::new(settings.list_config()),
            runtime: Runtime::new(api, Arc::new(InlineScheduler)),
        }
    }

    /// Apply an event and everything it leads to.
    fn run(&mut self, event: Event) -> Result<()> {
        self.runtime.dispatch(&mut self.state, event);
        self.runtime.pump(&mut self.state);
        match self.state.message() {
            Some(notice) if notice.is_error() => bail!("{}", notice.text),
            _ => Ok(()),
        }
    }

    fn print_filtered(&self, json: bool) -> Result<()> {
        if json {
            let professors: Vec<_> = self.state.filtered().collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&professors).context("Failed to encode professors")?
            );
            return Ok(());
        }

        if self.state.filtered_len() == 0 {
            println!("No professors found.");
        }
        for professor in self.state.filtered() {
            println!("{}", format_row(&ProfessorRow::new(professor, false)));
        }
        Ok(())
    }
}

/// Print the professor list.
pub(crate) fn list(api: Arc<dyn ProfessorApi>, settings: &Settings, json: bool) -> Result<()> {
    let mut session = Session::new(api, settings);
    session.run(Event::LoadRequested)?;
    session.print_filtered(json)
}

/// Print the professors matching a query.
pub(crate) fn search(
    api: Arc<dyn ProfessorApi>,
    settings: &Settings,
    query: &str,
    json: bool,
) -> Result<()> {
    if query.trim().is_empty() {
        bail!("Search query must not be blank");
    }
    let mut session = Session::new(api, settings);
    session.run(Event::LoadRequested)?;
    session.run(Event::SearchSubmitted(query.to_string()))?;
    session.print_filtered(json)
}

/// Trigger a scrape and reload the list.
pub(crate) fn scrape(api: Arc<dyn ProfessorApi>, settings: &Settings) -> Result<()> {
    let mut session = Session::new(api, settings);
    session.run(Event::RefreshRequested)?;
    if let Some(notice) = session.state.message() {
        println!("{}", notice.text);
    }
    println!("{} professors loaded", session.state.professors().len());
    Ok(())
}

/// Print one professor in full.
pub(crate) fn show(api: Arc<dyn ProfessorApi>, id: ProfessorId) -> Result<()> {
    let professor = api
        .professor(id)
        .with_context(|| format!("Failed to fetch professor {}", id))?;
    let view = DetailView::new(&professor);
    println!("{}", view.name);
    println!("Class: {}", view.class_name);
    println!("Department: {}", view.department);
    println!("Average Grade: {}", view.avg_grade);
    if let Some(rating) = view.rating {
        println!("{}", rating);
    }
    if let Some(id) = view.ratemyprof_id {
        println!("RateMyProf ID: {}", id);
    }
    Ok(())
}

/// Print backend statistics.
pub(crate) fn stats(api: Arc<dyn ProfessorApi>) -> Result<()> {
    let stats = api.stats().context("Failed to fetch stats")?;
    println!("Total: {}", stats.total);
    println!("With ratings: {}", stats.with_ratings);
    println!("From RateMyProf: {}", stats.from_rate_my_prof);
    Ok(())
}

fn format_row(row: &ProfessorRow) -> String {
    let mut line = format!("{} / {} / {}", row.name, row.class_name, row.department);
    if let Some(ref rating) = row.rating {
        line.push_str("\n  ");
        line.push_str(rating);
    }
    line
}
