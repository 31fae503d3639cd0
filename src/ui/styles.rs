// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

use crate::constants::{ALREADY_EXISTS_LINE, COPIED_LINE, NOT_FOUND_LINE};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // === Panels ===

    pub fn title() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::Rgb(102, 102, 102))
    }

    pub fn popup_border() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::Rgb(128, 128, 128))
    }

    pub fn input() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // === List Items ===

    pub fn list_selected() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn list_normal() -> Style {
        Style::default()
    }

    // === Flags ===

    pub fn flag(enabled: bool) -> Style {
        if enabled {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red)
        }
    }

    // === Log Lines ===

    /// Color a report line by what it says
    pub fn log_line(line: &str) -> Style {
        if line.starts_with("Error: ") {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else if line == NOT_FOUND_LINE {
            Style::default().fg(Color::Red)
        } else if line == COPIED_LINE {
            Style::default().fg(Color::Green)
        } else if line == ALREADY_EXISTS_LINE {
            Style::default().fg(Color::Yellow)
        } else if line.starts_with("Processing ") {
            Self::header()
        } else if line.starts_with('[') {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Self::muted()
        }
    }
}
