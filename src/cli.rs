// Command line interface
// Scriptable access to processing, archive discovery and the config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

use m3helper::operations::{find_archives, process_model, process_models, WriteSink};
use m3helper::{AppConfig, ConfigStore};

#[derive(Parser)]
#[command(name = "m3helper", version)]
#[command(about = "Find and copy the textures used by M3 models", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Config file to use instead of ./config.yaml and ~/.m3helper.yaml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Model files dropped onto the executable; files not ending in m3 are ignored
    #[arg(value_name = "FILE")]
    pub dropped: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the terminal UI (default)
    Tui,

    /// Resolve (and optionally copy) the textures of model files
    Process {
        /// Model files to scan
        #[arg(required = true)]
        models: Vec<PathBuf>,

        /// Copy resolved textures below this directory
        #[arg(short, long, value_name = "DIR")]
        target: Option<PathBuf>,
    },

    /// List archive directories below a root
    FindArchives {
        /// Directory to search
        root: PathBuf,

        /// Store the result as the configured source directories
        #[arg(long)]
        save: bool,
    },

    /// Inspect or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the configured source directories
    Show,
    /// Print the config file location
    Path,
    /// Append a source directory
    Add { dir: String },
    /// Remove every source directory
    Clear,
}

impl Cli {
    /// Config store honoring `--config`
    pub fn store(&self) -> ConfigStore {
        match &self.config {
            Some(path) => ConfigStore::at(path),
            None => ConfigStore::new(),
        }
    }

    /// True when the TUI should start
    pub fn wants_tui(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui)) && self.dropped.is_empty()
    }

    /// Run a non-TUI command
    pub fn execute(&self) -> Result<()> {
        let mut store = self.store();
        let config = store.load().context("Failed to load configuration")?;

        match &self.command {
            None | Some(Commands::Tui) => process_dropped(&self.dropped, &config),
            Some(Commands::Process { models, target }) => {
                process(models, target.as_deref(), &config)
            }
            Some(Commands::FindArchives { root, save }) => {
                find(root, *save, config, &store)
            }
            Some(Commands::Config { action }) => config_action(action, config, &store),
        }
    }
}

fn process_dropped(dropped: &[String], config: &AppConfig) -> Result<()> {
    let mut sink = WriteSink::new(io::stdout().lock());
    let count = process_models(dropped, &config.source_dirs, None, &mut sink)
        .context("Processing dropped files failed")?;
    if count == 0 {
        tracing::warn!("None of the given files is an m3 model");
    }
    Ok(())
}

fn process(models: &[PathBuf], target: Option<&Path>, config: &AppConfig) -> Result<()> {
    if config.source_dirs.is_empty() {
        tracing::warn!("No source directories configured; nothing can be resolved");
    }

    let mut sink = WriteSink::new(io::stdout().lock());
    for model in models {
        process_model(model, &config.source_dirs, target, &mut sink)
            .with_context(|| format!("Failed to process {}", model.display()))?;
    }
    Ok(())
}

fn find(root: &Path, save: bool, mut config: AppConfig, store: &ConfigStore) -> Result<()> {
    tracing::info!("Searching archives in {}", root.display());
    let found = find_archives(root)
        .collect_all()
        .with_context(|| format!("Failed to search {}", root.display()))?;
    tracing::info!("Found {} archive directories", found.len());

    for path in &found {
        println!("{}", path.display());
    }

    if save {
        config.source_dirs = found.iter().map(|p| p.display().to_string()).collect();
        let path = store.save(&config).context("Failed to save configuration")?;
        tracing::info!("Saved {} source directories to {}", found.len(), path.display());
    }
    Ok(())
}

fn config_action(action: &ConfigAction, mut config: AppConfig, store: &ConfigStore) -> Result<()> {
    match action {
        ConfigAction::Show => {
            for dir in &config.source_dirs {
                println!("{}", dir);
            }
        }
        ConfigAction::Path => {
            if let Some(path) = store.location() {
                println!("{}", path.display());
            }
        }
        ConfigAction::Add { dir } => {
            config.source_dirs.push(dir.clone());
            store.save(&config).context("Failed to save configuration")?;
        }
        ConfigAction::Clear => {
            config.source_dirs.clear();
            store.save(&config).context("Failed to save configuration")?;
        }
    }
    Ok(())
}
