// Application State
// Main application state management and lifecycle

use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::{AppConfig, ConfigStore};
use crate::dashboard::DashboardState;
use crate::operations::{find_archives, process_model, process_models};
use crate::utilities::parse_dropped_paths;

/// What a text prompt is asking for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    /// Model file to process
    ModelFile,
    /// Destination directory for copies
    TargetDir,
    /// Source directory to append in the settings dialog
    AddSourceDir,
    /// Root to search for archives in the settings dialog
    ArchiveRoot,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::ModelFile => "Select m3 file",
            PromptKind::TargetDir => "Choose destination directory",
            PromptKind::AddSourceDir => "Add source directory",
            PromptKind::ArchiveRoot => "Choose directory to search for archives",
        }
    }
}

/// Single-line text prompt replacing the file pickers
#[derive(Clone, Debug)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// The screen currently in front
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Main,
    Settings,
    About,
}

/// Working copy of the source directories while the settings dialog is open
#[derive(Clone, Debug, Default)]
pub struct SettingsState {
    pub source_dirs: Vec<String>,
    pub selected: usize,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Loaded configuration
    pub config: AppConfig,

    /// Where the configuration lives
    pub store: ConfigStore,

    /// Log view
    pub log: DashboardState,

    /// Destination directory for copies
    pub target_dir: String,

    /// Copy resolved textures into the target directory
    pub auto_copy: bool,

    /// Screen in front
    pub screen: Screen,

    /// Open text prompt, drawn over the current screen
    pub prompt: Option<Prompt>,

    /// Settings dialog working copy
    pub settings: SettingsState,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig, store: ConfigStore) -> Self {
        Self {
            config,
            store,
            log: DashboardState::new(),
            target_dir: String::new(),
            auto_copy: true,
            screen: Screen::Main,
            prompt: None,
            settings: SettingsState::default(),
            should_quit: false,
        }
    }

    /// Target directory to copy into, if copying is enabled
    pub fn copy_target(&self) -> Option<PathBuf> {
        let target = self.target_dir.trim();
        if self.auto_copy && !target.is_empty() {
            Some(PathBuf::from(target))
        } else {
            None
        }
    }

    /// Process one model file and report into the log
    pub fn process_model_file(&mut self, path: &str) {
        let target = self.copy_target();
        let result = process_model(
            Path::new(path),
            &self.config.source_dirs,
            target.as_deref(),
            &mut self.log,
        );

        match result {
            Ok(()) => self.log.set_status_text(&format!("Processed {}", path)),
            Err(e) => self.report_error(&format!("Processing {} failed", path), &e),
        }
    }

    /// Process pasted (dropped) text: every model path in it
    pub fn process_dropped(&mut self, text: &str) {
        let paths = parse_dropped_paths(text);
        let target = self.copy_target();
        let result = process_models(
            &paths,
            &self.config.source_dirs,
            target.as_deref(),
            &mut self.log,
        );

        match result {
            Ok(0) => self.log.set_status_text("Dropped files contain no m3 model"),
            Ok(count) => self
                .log
                .set_status_text(&format!("Processed {} dropped model(s)", count)),
            Err(e) => self.report_error("Processing dropped files failed", &e),
        }
    }

    /// Log an error in the log view and in the log file
    pub fn report_error(&mut self, context: &str, err: &dyn std::error::Error) {
        error!("{}: {}", context, err);
        self.log.add_output_line(format!("Error: {}: {}", context, err));
        self.log.set_status_text(context);
    }

    // === Prompts ===

    /// Open a text prompt, prefilled where it makes sense
    pub fn open_prompt(&mut self, kind: PromptKind) {
        let input = match kind {
            PromptKind::TargetDir => self.target_dir.clone(),
            _ => String::new(),
        };
        self.prompt = Some(Prompt { kind, input });
    }

    /// Close the prompt without acting on it
    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Close the prompt and act on its input
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let input = prompt.input.trim().to_string();
        if input.is_empty() {
            return;
        }

        match prompt.kind {
            PromptKind::ModelFile => self.process_model_file(&input),
            PromptKind::TargetDir => {
                self.log.set_status_text(&format!("Target directory: {}", input));
                self.target_dir = input;
            }
            PromptKind::AddSourceDir => {
                self.settings.source_dirs.push(input);
                self.settings.selected = self.settings.source_dirs.len() - 1;
            }
            PromptKind::ArchiveRoot => self.search_archives(&input),
        }
    }

    /// Type a character into the open prompt
    pub fn prompt_push(&mut self, c: char) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.input.push(c);
        }
    }

    /// Paste text into the open prompt (newlines dropped)
    pub fn prompt_push_str(&mut self, text: &str) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.input.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        }
    }

    /// Delete the last character of the open prompt
    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.input.pop();
        }
    }

    // === Main screen ===

    pub fn toggle_auto_copy(&mut self) {
        self.auto_copy = !self.auto_copy;
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
        self.log.set_status_text("Ready");
    }

    pub fn show_about(&mut self) {
        self.screen = Screen::About;
    }

    // === Settings dialog ===

    /// Open the settings dialog on a copy of the configured directories
    pub fn open_settings(&mut self) {
        self.settings = SettingsState {
            source_dirs: self.config.source_dirs.clone(),
            selected: 0,
        };
        self.screen = Screen::Settings;
    }

    pub fn settings_select_previous(&mut self) {
        self.settings.selected = self.settings.selected.saturating_sub(1);
    }

    pub fn settings_select_next(&mut self) {
        if self.settings.selected + 1 < self.settings.source_dirs.len() {
            self.settings.selected += 1;
        }
    }

    /// Remove the selected directory from the working copy
    pub fn settings_delete_selected(&mut self) {
        let settings = &mut self.settings;
        if settings.selected < settings.source_dirs.len() {
            settings.source_dirs.remove(settings.selected);
            if settings.selected >= settings.source_dirs.len() {
                settings.selected = settings.source_dirs.len().saturating_sub(1);
            }
        }
    }

    /// Replace the working copy with the archives found below `root`
    pub fn search_archives(&mut self, root: &str) {
        info!("Searching archives in {}", root);
        match find_archives(root).collect_all() {
            Ok(found) => {
                info!("Found {} archive directories", found.len());
                self.settings.source_dirs = found
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                self.settings.selected = 0;
                self.log
                    .set_status_text(&format!("Found {} archive directories", found.len()));
            }
            Err(e) => self.report_error(&format!("Searching archives in {} failed", root), &e),
        }
    }

    /// Accept the dialog: store the directories and save the configuration
    pub fn settings_accept(&mut self) {
        let text = self.settings.source_dirs.join("\n");
        self.config.set_source_dirs_from_text(&text);
        self.screen = Screen::Main;

        match self.store.save(&self.config) {
            Ok(path) => {
                info!("Configuration saved to {}", path.display());
                self.log
                    .set_status_text(&format!("Configuration saved to {}", path.display()));
            }
            Err(e) => self.report_error("Saving configuration failed", &e),
        }
    }

    /// Leave the current dialog without saving
    pub fn close_screen(&mut self) {
        self.screen = Screen::Main;
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
