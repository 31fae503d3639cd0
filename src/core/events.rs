// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::app::{PromptKind, Screen};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Scroll the log up by amount
    ScrollUp(usize),

    /// Scroll the log down by amount
    ScrollDown(usize),

    /// Open a text prompt
    OpenPrompt(PromptKind),

    /// Toggle copying into the target directory
    ToggleAutoCopy,

    /// Open the settings dialog
    OpenSettings,

    /// Clear the log
    ClearLog,

    /// Show the about popup
    ShowAbout,

    /// Move selection up (settings)
    SelectPrevious,

    /// Move selection down (settings)
    SelectNext,

    /// Remove the selected source directory (settings)
    DeleteSelected,

    /// Accept the prompt or dialog
    Confirm,

    /// Go back / escape current mode
    Back,

    /// Character typed into a prompt
    Input(char),

    /// Delete the last prompt character
    Backspace,

    /// Pasted text (files dropped on the terminal)
    Paste(String),

    /// No operation
    None,
}

/// Where keyboard input is currently going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Main,
    Settings,
    About,
    Prompt,
}

impl InputContext {
    pub fn from_state(screen: Screen, prompt_open: bool) -> Self {
        if prompt_open {
            return InputContext::Prompt;
        }
        match screen {
            Screen::Main => InputContext::Main,
            Screen::Settings => InputContext::Settings,
            Screen::About => InputContext::About,
        }
    }
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event, context: InputContext) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key, context),
            Event::Mouse(mouse) => Self::handle_mouse(mouse, context),
            Event::Paste(text) => AppEvent::Paste(text),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent, context: InputContext) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppEvent::Quit;
        }

        match context {
            InputContext::Prompt => match key.code {
                KeyCode::Enter => AppEvent::Confirm,
                KeyCode::Esc => AppEvent::Back,
                KeyCode::Backspace => AppEvent::Backspace,
                KeyCode::Char(c) => AppEvent::Input(c),
                _ => AppEvent::None,
            },
            InputContext::Settings => match key.code {
                KeyCode::Up | KeyCode::Char('k') => AppEvent::SelectPrevious,
                KeyCode::Down | KeyCode::Char('j') => AppEvent::SelectNext,
                KeyCode::Char('a') => AppEvent::OpenPrompt(PromptKind::AddSourceDir),
                KeyCode::Char('f') => AppEvent::OpenPrompt(PromptKind::ArchiveRoot),
                KeyCode::Char('d') | KeyCode::Delete => AppEvent::DeleteSelected,
                KeyCode::Enter => AppEvent::Confirm,
                KeyCode::Esc => AppEvent::Back,
                _ => AppEvent::None,
            },
            InputContext::About => match key.code {
                KeyCode::Char('q') => AppEvent::Quit,
                _ => AppEvent::Back,
            },
            InputContext::Main => match key.code {
                KeyCode::Char('q') => AppEvent::Quit,

                // Scrolling
                KeyCode::Up | KeyCode::Char('k') => AppEvent::ScrollUp(1),
                KeyCode::Down | KeyCode::Char('j') => AppEvent::ScrollDown(1),
                KeyCode::PageUp => AppEvent::ScrollUp(10),
                KeyCode::PageDown => AppEvent::ScrollDown(10),

                // Actions
                KeyCode::Char('o') | KeyCode::Enter => AppEvent::OpenPrompt(PromptKind::ModelFile),
                KeyCode::Char('t') => AppEvent::OpenPrompt(PromptKind::TargetDir),
                KeyCode::Char('a') => AppEvent::ToggleAutoCopy,
                KeyCode::Char('s') => AppEvent::OpenSettings,
                KeyCode::Char('c') => AppEvent::ClearLog,
                KeyCode::Char('i') | KeyCode::Char('?') => AppEvent::ShowAbout,
                KeyCode::Esc => AppEvent::Back,

                _ => AppEvent::None,
            },
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent, context: InputContext) -> AppEvent {
        match (context, mouse.kind) {
            (InputContext::Main, MouseEventKind::ScrollUp) => AppEvent::ScrollUp(3),
            (InputContext::Main, MouseEventKind::ScrollDown) => AppEvent::ScrollDown(3),
            (InputContext::Settings, MouseEventKind::ScrollUp) => AppEvent::SelectPrevious,
            (InputContext::Settings, MouseEventKind::ScrollDown) => AppEvent::SelectNext,
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_keys_depend_on_context() {
        assert_eq!(
            EventHandler::handle(press(KeyCode::Char('a')), InputContext::Main),
            AppEvent::ToggleAutoCopy
        );
        assert_eq!(
            EventHandler::handle(press(KeyCode::Char('a')), InputContext::Settings),
            AppEvent::OpenPrompt(PromptKind::AddSourceDir)
        );
        assert_eq!(
            EventHandler::handle(press(KeyCode::Char('a')), InputContext::Prompt),
            AppEvent::Input('a')
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(EventHandler::handle(event, InputContext::Prompt), AppEvent::Quit);
    }

    #[test]
    fn test_paste_is_forwarded() {
        let event = Event::Paste("/tmp/unit.m3".to_string());
        assert_eq!(
            EventHandler::handle(event, InputContext::Main),
            AppEvent::Paste("/tmp/unit.m3".to_string())
        );
    }

    #[test]
    fn test_context_from_state() {
        assert_eq!(InputContext::from_state(Screen::Settings, true), InputContext::Prompt);
        assert_eq!(InputContext::from_state(Screen::About, false), InputContext::About);
    }
}
