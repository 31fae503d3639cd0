// Logging setup
// tracing-subscriber initialisation for the command line and the TUI

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use m3helper::constants::{APP_NAME, LOG_FILE_NAME};

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr; report lines themselves go to stdout
pub fn init_cli() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(std::io::stderr)
        .init();
}

/// Log to a file so the terminal UI is left alone
///
/// Returns the log file path, or `None` when no log file could be opened
/// (logging is then disabled).
pub fn init_tui() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join(APP_NAME);
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE_NAME);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("debug"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Some(path)
}
