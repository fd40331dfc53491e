//! Effect execution.
//!
//! [`Runtime`] turns the [`Effect`]s requested by the list state machine into
//! backend calls. Calls are handed to a [`Scheduler`]; their completions come
//! back as [`Event`]s over a channel and are applied on the caller's thread
//! by [`Runtime::pump`]. Requests are not fenced: when two loads overlap,
//! whichever completes last wins.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::api::ProfessorApi;
use crate::list::{Effect, Event, ListState};

/// Unit of work handed to a scheduler.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks now or after a delay.
pub trait Scheduler: Send + Sync {
    /// Run a task as soon as possible.
    fn spawn(&self, task: Task);

    /// Run a task once `delay` has elapsed.
    fn after(&self, delay: Duration, task: Task);
}

/// Runs every task on its own thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn spawn(&self, task: Task) {
        thread::spawn(task);
    }

    fn after(&self, delay: Duration, task: Task) {
        thread::spawn(move || {
            thread::sleep(delay);
            task();
        });
    }
}

/// Runs tasks on the calling thread, sleeping through delays.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineScheduler;

impl Scheduler for InlineScheduler {
    fn spawn(&self, task: Task) {
        task();
    }

    fn after(&self, delay: Duration, task: Task) {
        thread::sleep(delay);
        task();
    }
}

/// Executes effects against a backend and feeds completions back.
pub struct Runtime {
    api: Arc<dyn ProfessorApi>,
    scheduler: Arc<dyn Scheduler>,
    tx: Sender<Event>,
    rx: Receiver<Event>,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime").finish_non_exhaustive()
    }
}

impl Runtime {
    /// Create a runtime.
    pub fn new(api: Arc<dyn ProfessorApi>, scheduler: Arc<dyn Scheduler>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            api,
            scheduler,
            tx,
            rx,
        }
    }

    /// Apply an event and execute the effects it requests.
    pub fn dispatch(&self, state: &mut ListState, event: Event) {
        for effect in state.apply(event) {
            self.execute(effect);
        }
    }

    /// Apply every completion that has arrived so far.
    ///
    /// Returns the number of events applied.
    pub fn pump(&self, state: &mut ListState) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(state, event);
            applied += 1;
        }
        applied
    }

    /// Execute a single effect.
    pub fn execute(&self, effect: Effect) {
        tracing::debug!("Executing {:?}", effect);
        let tx = self.tx.clone();
        match effect {
            Effect::FetchProfessors => {
                let api = Arc::clone(&self.api);
                self.scheduler.spawn(Box::new(move || {
                    let event = match api.list_professors() {
                        Ok(professors) => Event::LoadSucceeded(professors),
                        Err(e) => Event::LoadFailed(e.to_string()),
                    };
                    send(&tx, event);
                }));
            },
            Effect::Scrape(request) => {
                let api = Arc::clone(&self.api);
                self.scheduler.spawn(Box::new(move || {
                    let event = match api.scrape(&request) {
                        Ok(outcome) if outcome.success => Event::RefreshSucceeded {
                            count: outcome.count,
                        },
                        Ok(outcome) => Event::RefreshRejected {
                            message: outcome.message,
                        },
                        Err(e) => Event::RefreshFailed(e.to_string()),
                    };
                    send(&tx, event);
                }));
            },
            Effect::ScheduleLoad(delay) => {
                self.scheduler
                    .after(delay, Box::new(move || send(&tx, Event::LoadRequested)));
            },
        }
    }
}

fn send(tx: &Sender<Event>, event: Event) {
    if tx.send(event).is_err() {
        tracing::debug!("Runtime dropped before completion was delivered");
    }
}
