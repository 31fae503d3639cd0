// UI module
// TUI components and views for m3helper

pub mod app_view;
pub mod popups;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::time::Duration;

use crate::core::{App, AppEvent, EventHandler, InputContext, Screen};

pub use app_view::render_app;
pub use popups::{render_about, render_prompt, render_settings};
pub use styles::Styles;

/// Run the main application event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events
        if event::poll(Duration::from_millis(250))? {
            let event = event::read()?;
            let context = InputContext::from_state(app.screen, app.prompt.is_some());
            let app_event = EventHandler::handle(event, context);

            handle_event(app, app_event);
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle an application event
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::ScrollUp(amount) => app.log.scroll_output_up(amount),
        AppEvent::ScrollDown(amount) => app.log.scroll_output_down(amount),
        AppEvent::OpenPrompt(kind) => app.open_prompt(kind),
        AppEvent::ToggleAutoCopy => app.toggle_auto_copy(),
        AppEvent::OpenSettings => app.open_settings(),
        AppEvent::ClearLog => app.clear_log(),
        AppEvent::ShowAbout => app.show_about(),
        AppEvent::SelectPrevious => app.settings_select_previous(),
        AppEvent::SelectNext => app.settings_select_next(),
        AppEvent::DeleteSelected => app.settings_delete_selected(),
        AppEvent::Confirm => {
            if app.prompt.is_some() {
                app.submit_prompt();
            } else if app.screen == Screen::Settings {
                app.settings_accept();
            }
        }
        AppEvent::Back => {
            if app.prompt.is_some() {
                app.cancel_prompt();
            } else {
                app.close_screen();
            }
        }
        AppEvent::Input(c) => app.prompt_push(c),
        AppEvent::Backspace => app.prompt_backspace(),
        AppEvent::Paste(text) => {
            // Dropped files go into an open prompt, otherwise they get processed
            if app.prompt.is_some() {
                app.prompt_push_str(&text);
            } else if app.screen == Screen::Main {
                app.process_dropped(&text);
            }
        }
        AppEvent::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppConfig, ConfigStore, PromptKind};

    fn test_app(dir: &std::path::Path) -> App {
        App::new(AppConfig::default(), ConfigStore::at(dir.join("config.yaml")))
    }

    #[test]
    fn test_paste_goes_to_open_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        handle_event(&mut app, AppEvent::OpenPrompt(PromptKind::TargetDir));
        handle_event(&mut app, AppEvent::Paste("/out".to_string()));
        handle_event(&mut app, AppEvent::Confirm);

        assert_eq!(app.target_dir, "/out");
        assert!(app.log.output_lines.is_empty());
    }

    #[test]
    fn test_paste_on_main_screen_processes_models() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("unit.m3");
        std::fs::write(&model, b"tex/a.dds\x00").unwrap();
        let mut app = test_app(dir.path());

        handle_event(&mut app, AppEvent::Paste(model.display().to_string()));

        assert_eq!(app.log.output_lines[0], "Processing \"unit.m3\"");
        assert!(app.log.output_lines.contains(&"- not found -".to_string()));
    }

    #[test]
    fn test_back_closes_prompt_before_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        handle_event(&mut app, AppEvent::OpenSettings);
        handle_event(&mut app, AppEvent::OpenPrompt(PromptKind::AddSourceDir));
        handle_event(&mut app, AppEvent::Back);
        assert!(app.prompt.is_none());
        assert_eq!(app.screen, Screen::Settings);

        handle_event(&mut app, AppEvent::Back);
        assert_eq!(app.screen, Screen::Main);
    }
}
