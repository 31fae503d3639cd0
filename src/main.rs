// m3helper
// TUI application for collecting the textures referenced by M3 models

// MODULES ------------------>>

mod cli;
mod logging;

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use cli::Cli;
use m3helper::ui::run_app;
use m3helper::{App, ConfigStore};

//--------------------------------------------------------<<

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.wants_tui() {
        run_tui(cli.store())
    } else {
        logging::init_cli();
        cli.execute()
    }
}

/// Load the configuration, then hand the terminal to the UI until it quits
fn run_tui(mut store: ConfigStore) -> Result<()> {
    let log_path = logging::init_tui();
    let config = store.load().context("Failed to load configuration")?;
    tracing::info!("Starting with {} source directories", config.source_dirs.len());

    let mut app = App::new(config, store);
    if let Some(path) = log_path {
        app.log.set_status_text(&format!("Ready. Log file: {}", path.display()));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}
