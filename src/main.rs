//! Profdeck - A terminal client for browsing professor ratings.

mod headless;

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use profdeck::api::{HttpApi, ProfessorApi};
use profdeck::app::App;
use profdeck::config::{Settings, DEFAULT_API_URL};
use profdeck::list::{Event as ListEvent, ListState, DEFAULT_SCHOOL_ID};
use profdeck::runtime::{Runtime, ThreadScheduler};
use profdeck::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "profdeck", version)]
#[command(about = "A terminal client for browsing and refreshing professor ratings", long_about = None)]
struct Args {
    /// Backend base URL
    #[arg(long, env = "PROFDECK_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Institution scraped on refresh
    #[arg(long, env = "PROFDECK_SCHOOL_ID", default_value = DEFAULT_SCHOOL_ID)]
    school_id: String,

    /// Wait before reloading after a successful scrape, in milliseconds
    #[arg(long, default_value_t = 1000)]
    refresh_delay_ms: u64,

    /// Request timeout in seconds (requests wait indefinitely by default)
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print all professors
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print professors whose class, name or department contains QUERY
    Search {
        /// Case-insensitive search text
        query: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print one professor in full
    Show {
        /// Professor id
        id: u64,
    },
    /// Scrape the rating site, then reload the list
    Scrape {
        /// Maximum number of professors to scrape
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Print backend statistics
    Stats,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Profdeck");
    }

    let settings = Settings::new(
        &args.api_url,
        args.school_id.clone(),
        Duration::from_millis(args.refresh_delay_ms),
        args.timeout.map(Duration::from_secs),
    )?;
    let api: Arc<dyn ProfessorApi> =
        Arc::new(HttpApi::new(settings.api_url.clone(), settings.timeout)?);

    let result = match args.command {
        Some(Command::List { json }) => headless::list(api, &settings, json),
        Some(Command::Search { ref query, json }) => headless::search(api, &settings, query, json),
        Some(Command::Show { id }) => headless::show(api, id),
        Some(Command::Scrape { limit }) => {
            headless::scrape(api, &settings.clone().with_scrape_limit(limit))
        },
        Some(Command::Stats) => headless::stats(api),
        None => run_tui(api, &settings),
    };

    if args.log.is_some() {
        tracing::info!("Profdeck exited");
    }

    result
}

fn run_tui(api: Arc<dyn ProfessorApi>, settings: &Settings) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let runtime = Runtime::new(api, Arc::new(ThreadScheduler));
    let mut app = App::new(
        ListState::new(settings.list_config()),
        runtime,
        settings.api_url.as_str(),
    );
    app.start();
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        eprintln!("Error: {}", err);
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| ui::draw(f, &mut app))?;

        // Redraw faster while the detail panel slides in
        let timeout = if app.detail.is_animating(Instant::now()) {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(&mut app, key) {
                        return Ok(());
                    }
                },
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        app.click(mouse.column, mouse.row);
                    }
                },
                _ => {},
            }
        }
    }
}

/// Handle one key press. Returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if let (KeyModifiers::CONTROL, KeyCode::Char('c')) = (key.modifiers, key.code) {
        return true;
    }

    // Detail overlay - handle separately
    if app.list.selected().is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_detail(),
            _ => {},
        }
        return false;
    }

    // Search mode - handle separately
    if app.search.is_active() {
        match key.code {
            KeyCode::Enter => app.submit_search(),
            KeyCode::Esc => app.search.cancel(),
            KeyCode::Backspace => app.search.backspace(),
            KeyCode::Char(c) => app.search.input(c),
            _ => {},
        }
        return false;
    }

    // Normal mode
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) => return true,

        // Navigation
        (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.dispatch(ListEvent::CursorUp);
        },
        (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            app.dispatch(ListEvent::CursorDown);
        },
        (KeyModifiers::NONE, KeyCode::Char('g')) | (KeyModifiers::NONE, KeyCode::Home) => {
            app.dispatch(ListEvent::CursorFirst);
        },
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
            app.dispatch(ListEvent::CursorLast);
        },
        (KeyModifiers::NONE, KeyCode::Enter) => app.open_highlighted(),

        // Search
        (KeyModifiers::NONE, KeyCode::Char('/')) => app.search.start(),
        (KeyModifiers::NONE, KeyCode::Esc) => app.clear_search(),

        // Features
        (KeyModifiers::NONE, KeyCode::Char('r')) => app.refresh(),
        (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_highlighted(),
        (KeyModifiers::NONE, KeyCode::Char('x')) => app.dispatch(ListEvent::MessageDismissed),
        (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

        _ => {},
    }
    false
}
