mod app;
mod carousel;
mod config;
mod home;
mod input;
mod loader;
mod models;
mod network;
mod theme;
mod ui;
mod utils;

use std::{fs::OpenOptions, io, sync::{Arc, Mutex}, time::{Duration, Instant}};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::runtime::Runtime;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::{App, Route};
use crate::config::Settings;
use crate::network::HttpProductSource;
use crate::theme::Theme;

const IDLE_POLL: Duration = Duration::from_millis(200);
const ANIMATION_POLL: Duration = Duration::from_millis(33);

#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "Browse the product catalog in your terminal")]
struct Cli {
    /// Product API prefix, overrides the configured base_url
    #[arg(long)]
    base_url: Option<String>,

    /// Persist --base-url into the user config
    #[arg(long, requires = "base_url")]
    save: bool,

    /// Request timeout in seconds (0 disables it)
    #[arg(long)]
    timeout: Option<u64>,

    /// Route to open on start
    #[arg(long, value_enum, default_value_t = Route::Home)]
    route: Route,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::new().context("Could not load configuration")?;

    if let Some(base_url) = cli.base_url {
        if cli.save {
            let path = config::save_base_url(&base_url)?;
            println!("Saved base_url to {}", path.display());
        }
        settings.base_url = base_url;
    }
    if let Some(timeout) = cli.timeout {
        settings.request_timeout_secs = Some(timeout);
    }

    init_logging(&settings)?;
    info!(base_url = %settings.base_url, "starting storefront");

    let rt = Runtime::new()?;
    let source = Arc::new(HttpProductSource::new(&settings.base_url, settings.request_timeout())?);
    info!(endpoint = source.endpoint(), "product endpoint");
    let mut app = App::new(cli.route, source, rt.handle().clone(), settings.currency_symbol.clone());

    enable_raw_mode()?;
    let result = run_in_terminal(&mut app);
    app.shutdown();
    let result = finish(result, restore_terminal());

    if let Err(e) = &result {
        error!(error = %e, "storefront exited with an error");
    }
    result
}

fn run_in_terminal<S: network::ProductSource>(app: &mut App<S>) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run_app(&mut terminal, app)
}

/// Undoes raw mode and the alternate screen; runs even when setup failed halfway.
fn restore_terminal() -> anyhow::Result<()> {
    let raw = disable_raw_mode();
    let mut stdout = io::stdout();
    let screen = execute!(stdout, LeaveAlternateScreen, cursor::Show);
    raw?;
    screen?;
    Ok(())
}

/// The run's own error wins over a failure to restore the terminal.
fn finish(run: anyhow::Result<()>, restore: anyhow::Result<()>) -> anyhow::Result<()> {
    match (run, restore) {
        (Err(e), Err(restore_err)) => Err(e.context(format!("also failed to restore terminal: {restore_err}"))),
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restore) => restore,
    }
}

fn run_app<S: network::ProductSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> anyhow::Result<()> {
    let theme = Theme::default();
    loop {
        app.tick();
        let now = Instant::now();
        terminal.draw(|f| ui::draw(f, app, &theme, now))?;

        let animating = app.home().is_some_and(|home| home.slides().is_animating(now));
        let poll = if animating { ANIMATION_POLL } else { IDLE_POLL };
        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let columns = utils::grid_columns_for_terminal()?;
                if !input::handle_key(key.code, app, columns) {
                    return Ok(());
                }
            }
        }
    }
}

fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let Some(path) = settings.log_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
