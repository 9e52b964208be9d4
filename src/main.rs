//! launchtab - a terminal table viewer for SpaceX launch data.
//!
//! Fetches the launch dataset once from the configured endpoint and renders
//! it as a sortable, paginated table.

mod api;
mod app;
mod config;
mod error;
mod events;
mod logging;
mod model;
mod tasks;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use crate::api::LaunchClient;
use crate::app::App;
use crate::config::Config;
use crate::error::AppError;
use crate::events::EventHandler;
use crate::tasks::TaskSpawner;

/// Command-line arguments. Anything given here overrides the config file.
#[derive(Debug, Parser)]
#[command(name = "launchtab", version, about = "Browse SpaceX launches in your terminal")]
struct Cli {
    /// URL of the launches endpoint.
    #[arg(long)]
    endpoint: Option<String>,

    /// Page size to start with. Must be one of the configured options.
    #[arg(long)]
    page_size: Option<usize>,

    /// Path to an alternative config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init()?;

    let config = load_config(&cli)?;
    info!(endpoint = %config.endpoint, "Configuration loaded");

    let mut terminal =
        setup_terminal().map_err(|e| AppError::terminal(format!("setup failed: {e}")))?;
    let result = run(&mut terminal, config).await;
    restore_terminal(&mut terminal)
        .map_err(|e| AppError::terminal(format!("restore failed: {e}")))?;

    logging::shutdown();
    result?;
    Ok(())
}

/// Load configuration and apply CLI overrides.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(size) = cli.page_size {
        if config.page_sizes.contains(&size) {
            config.default_page_size = size;
        } else {
            warn!(size, "Ignoring --page-size: not one of the configured options");
        }
    }

    config.validate()?;
    Ok(config)
}

/// The main event loop: draw, poll input, drain task results.
async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> Result<(), AppError> {
    let client = LaunchClient::new(&config.endpoint)?;
    let (spawner, mut messages) = TaskSpawner::new();
    let handler = EventHandler::new();
    let mut app = App::new(config);

    // Initial fetch; results arrive over the channel while the UI runs.
    spawner.spawn_fetch_launches(client.clone(), false);

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        let event = handler.next()?;
        app.update(event);

        while let Ok(message) = messages.try_recv() {
            app.handle_api_message(message);
        }

        if app.take_pending_refresh() {
            spawner.spawn_fetch_launches(client.clone(), true);
        }
    }

    Ok(())
}

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undo `setup_terminal`.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
