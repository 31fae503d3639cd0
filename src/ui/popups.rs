// Popups
// Prompt, settings dialog and about box drawn over the main view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::Styles;
use crate::constants::{APP_NAME, APP_VERSION, ARCHIVE_SUFFIXES};
use crate::core::{App, Prompt};

/// Rectangle of the given size centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the single-line path prompt
pub fn render_prompt(f: &mut Frame, area: Rect, prompt: &Prompt) {
    let popup = centered_rect(area.width.saturating_sub(10).max(40), 5, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", prompt.kind.title()))
        .border_style(Styles::popup_border());
    let inner = block.inner(popup);

    // Keep the end of long paths visible
    let width = inner.width.saturating_sub(1) as usize;
    let shown: String = {
        let count = prompt.input.chars().count();
        prompt.input.chars().skip(count.saturating_sub(width)).collect()
    };

    let lines = vec![
        Line::from(vec![Span::styled(shown, Styles::input()), Span::raw("█")]),
        Line::from(Span::styled("Enter: OK | Esc: Cancel | paste or drop a path", Styles::muted())),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Render the source directory settings dialog
pub fn render_settings(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(
        area.width.saturating_sub(8).max(50),
        area.height.saturating_sub(4).max(10),
        area,
    );

    let location = app
        .store
        .location()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Settings: source directories ")
        .border_style(Styles::popup_border());
    let inner = block.inner(popup);

    f.render_widget(Clear, popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    let items: Vec<ListItem> = if app.settings.source_dirs.is_empty() {
        vec![ListItem::new(Span::styled(
            "No source directories. Press a to add one or f to search for archives.",
            Styles::muted(),
        ))]
    } else {
        app.settings
            .source_dirs
            .iter()
            .enumerate()
            .map(|(i, dir)| ListItem::new(format!("{:>3}. {}", i + 1, dir)))
            .collect()
    };

    let mut state = ListState::default();
    if !app.settings.source_dirs.is_empty() {
        state.select(Some(app.settings.selected));
    }

    let list = List::new(items)
        .style(Styles::list_normal())
        .highlight_style(Styles::list_selected());
    f.render_stateful_widget(list, chunks[0], &mut state);

    let help = vec![
        Line::from(Span::styled(
            "a: Add | d: Delete | f: Find archives | ↑/↓: Select | Enter: Save | Esc: Cancel",
            Styles::footer(),
        )),
        Line::from(Span::styled(format!("Config file: {}", location), Styles::muted())),
    ];
    f.render_widget(Paragraph::new(help), chunks[1]);
}

/// Render the about box
pub fn render_about(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 10, area);

    let text = vec![
        Line::from(Span::styled(format!("{} {}", APP_NAME, APP_VERSION), Styles::header())),
        Line::from(""),
        Line::from("Collects the textures referenced by M3 models from your"),
        Line::from("source directories and copies them next to your project."),
        Line::from(""),
        Line::from(Span::styled(
            format!("Archive suffixes: {}", ARCHIVE_SUFFIXES.join(", ")),
            Styles::muted(),
        )),
        Line::from(Span::styled("Press any key to close", Styles::muted())),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" About ")
        .border_style(Styles::popup_border());

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}
