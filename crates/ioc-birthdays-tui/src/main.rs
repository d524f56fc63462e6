//! IOC Birthdays - a terminal dashboard of IOC member birthdays.
//!
//! Shows whose birthday is today, who is coming up in the next couple of
//! weeks, this month and next month, plus a searchable full roster.

mod app;
mod cli;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ioc_birthdays_core::config::Config;
use ioc_birthdays_core::{
    classify, full_listing, store, BirthdayReport, ListingQuery, RosterStore,
};

use app::{App, AppState};
use cli::CliArgs;
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 250;

const LOG_FILE: &str = "ioc-birthdays.log";

/// Initialize the tracing subscriber.
///
/// With a log directory, output goes to a file there so it doesn't draw over
/// the TUI; otherwise to stderr. Use RUST_LOG to control the level.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_dir.filter(|dir| std::fs::create_dir_all(dir).is_ok()) {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
            None
        }
    }
}

/// Config file, then environment, then command-line flags.
fn resolve_config(args: &CliArgs) -> Config {
    let mut config = Config::load_or_default();
    config.apply_env();
    if let Some(ref path) = args.roster {
        config.roster_path = Some(path.clone());
    }
    if let Some(days) = args.window {
        config.window_days = days;
    }
    config
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = cli::parse_args(std::env::args().skip(1))?;
    if args.help {
        print!("{}", cli::USAGE);
        return Ok(());
    }

    if args.dump {
        let _guard = init_tracing(None);
        return dump(&args);
    }

    let log_dir = Config::cache_dir().ok();
    let _guard = init_tracing(log_dir.as_deref());
    info!("IOC Birthdays starting");

    let config = resolve_config(&args);
    let store = store::init(config.roster_source());

    let mut app = new_app(&args, config, store);
    app.reload();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("IOC Birthdays shutting down");
    Ok(())
}

/// The TUI starts with `--date` and `--search` already applied.
fn new_app(args: &CliArgs, config: Config, store: &'static RosterStore) -> App {
    let mut app = App::new(config, store, args.date);
    if let Some(ref search) = args.search {
        app.listing.search = search.clone();
    }
    app
}

/// Print every view for the reference date as JSON.
fn dump(args: &CliArgs) -> Result<()> {
    let config = resolve_config(args);
    let store = store::init(config.roster_source());
    let roster = store.refresh()?;
    if roster.skipped_rows() > 0 {
        warn!(skipped = roster.skipped_rows(), "Some roster rows were skipped");
    }

    let today = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let views = classify(roster.members(), today, config.window_days);
    let query = ListingQuery::with_search(args.search.clone().unwrap_or_default());
    let listing = full_listing(roster.members(), &query);

    let report = BirthdayReport::new(&views, &listing);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                if handle_input(app, key) {
                    return Ok(());
                }
            }
        }

        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
