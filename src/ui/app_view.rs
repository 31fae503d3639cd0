// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_about, render_prompt, render_settings, Styles};
use crate::constants::{APP_NAME, APP_VERSION};
use crate::core::{App, Screen};
use crate::render::render_dashboard;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Paths panel
            Constraint::Min(0),    // Log + status
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_paths_panel(f, app, chunks[1]);
    render_dashboard(f, chunks[2], &mut app.log);
    render_footer(f, app, chunks[3]);

    match app.screen {
        Screen::Main => {}
        Screen::Settings => render_settings(f, area, app),
        Screen::About => render_about(f, area),
    }

    if let Some(prompt) = &app.prompt {
        render_prompt(f, area, prompt);
    }
}

/// Render the header bar
fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(format!("{} {}", APP_NAME, APP_VERSION))
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render target directory, copy flag and configured sources
fn render_paths_panel(f: &mut Frame, app: &App, area: Rect) {
    let target = if app.target_dir.trim().is_empty() {
        Span::styled("(not set)", Styles::muted())
    } else {
        Span::styled(app.target_dir.clone(), Styles::text())
    };

    let lines = vec![
        Line::from(vec![Span::styled("Target dir:  ", Styles::muted()), target]),
        Line::from(vec![
            Span::styled("Auto copy:   ", Styles::muted()),
            Span::styled(if app.auto_copy { "on" } else { "off" }, Styles::flag(app.auto_copy)),
        ]),
        Line::from(vec![
            Span::styled("Sources:     ", Styles::muted()),
            Span::styled(
                format!("{} directories configured", app.config.source_dirs.len()),
                Styles::text(),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Paths ")
            .border_style(Styles::border()),
    );
    f.render_widget(panel, area);
}

/// Render the footer bar
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match (app.prompt.is_some(), app.screen) {
        (true, _) => "Enter: OK | Esc: Cancel | Backspace: Delete",
        (false, Screen::Settings) => "a: Add | d: Delete | f: Find archives | Enter: Save | Esc: Cancel",
        (false, Screen::About) => "Any key: Close",
        (false, Screen::Main) => {
            "q: Quit | o: Open m3 | t: Target dir | a: Auto copy | s: Settings | c: Clear log | i: About | ↑/↓ PgUp/PgDn: Scroll"
        }
    };

    let footer = Paragraph::new(help_text)
        .style(Styles::footer())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
